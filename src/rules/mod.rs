//! Game rules for standard Gomoku
//!
//! Five or more stones in an unbroken line (horizontal, vertical or either
//! diagonal) wins. Overlines count.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_line_at_pos, has_five_at_pos, DIRECTIONS, WIN_LENGTH};
