//! Round state machine: moves, undo, reset and the session scoreboard

mod engine;
mod error;


pub use engine::GameEngine;
pub use error::{MoveError, UndoError};

use crate::board::{Pos, Stone};

/// A placed stone, recorded in play order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub player: Stone,
}

/// State of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundStatus {
    #[default]
    InProgress,
    Won(Stone),
}

impl RoundStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, RoundStatus::Won(_))
    }

    #[inline]
    pub fn winner(self) -> Option<Stone> {
        match self {
            RoundStatus::Won(winner) => Some(winner),
            RoundStatus::InProgress => None,
        }
    }
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Round continues, `next` is to move
    Continue { next: Stone },
    /// The move completed five in a row
    Win { winner: Stone },
}

/// Completed-round wins per color. Only ever incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    black: u32,
    white: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins for a color (always 0 for Empty)
    #[inline]
    pub fn wins(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
            Stone::Empty => 0,
        }
    }

    #[inline]
    pub fn black(&self) -> u32 {
        self.black
    }

    #[inline]
    pub fn white(&self) -> u32 {
        self.white
    }

    /// Rounds decided so far this session
    #[inline]
    pub fn rounds_played(&self) -> u32 {
        self.black + self.white
    }

    pub(crate) fn record_win(&mut self, winner: Stone) {
        match winner {
            Stone::Black => self.black = self.black.saturating_add(1),
            Stone::White => self.white = self.white.saturating_add(1),
            Stone::Empty => {}
        }
    }
}
