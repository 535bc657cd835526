//! Two-player Gomoku (five-in-a-row) on a 15x15 board
//!
//! The crate is split into a rule engine and a desktop front-end:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection (5 or more in a row, overlines allowed)
//! - [`game`]: Round state machine with undo, reset and a running scoreboard
//! - [`ui`]: egui front-end that drives the engine from mouse clicks
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameEngine, MoveOutcome, RoundStatus, Stone};
//!
//! let mut game = GameEngine::new();
//! for col in 3..7 {
//!     game.apply_move(7, col).unwrap(); // Black
//!     game.apply_move(0, col).unwrap(); // White
//! }
//! let outcome = game.apply_move(7, 7).unwrap();
//!
//! assert!(matches!(outcome, MoveOutcome::Win { winner: Stone::Black, .. }));
//! assert_eq!(game.status(), RoundStatus::Won(Stone::Black));
//! assert_eq!(game.scoreboard().wins(Stone::Black), 1);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::AppConfig;
pub use game::{GameEngine, Move, MoveError, MoveOutcome, RoundStatus, Scoreboard, UndoError};
