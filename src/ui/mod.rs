//! GUI module for the Gomoku game
//!
//! A native front-end using egui/eframe. It holds the [`GameEngine`](crate::GameEngine)
//! and redraws from its accessors every frame.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
pub use board_view::BoardView;
