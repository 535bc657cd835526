//! Rejection reasons for engine operations
//!
//! A rejected call never changes engine state.

use crate::board::{Pos, Stone};

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Coordinates outside the 15x15 grid
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Target cell already holds a stone
    #[error("position {pos} is already occupied")]
    Occupied { pos: Pos },

    /// Round has been won, reset before playing on
    #[error("round is over, {winner} has won")]
    RoundOver { winner: Stone },
}

/// Why an undo was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    #[error("no moves to undo")]
    NoMoves,

    /// Finished rounds can only be reset
    #[error("round is over, {winner} has won")]
    RoundOver { winner: Stone },
}
