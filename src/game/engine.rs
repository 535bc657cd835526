//! Game engine for a single session of consecutive rounds

use log::{debug, info, trace};

use super::{Move, MoveError, MoveOutcome, RoundStatus, Scoreboard, UndoError};
use crate::board::{Board, Pos, Stone, TOTAL_CELLS};
use crate::rules::{find_five_line_at_pos, has_five_at_pos};

/// Owns the board, move history, turn, round status and scoreboard.
///
/// All mutation goes through [`apply_move`](Self::apply_move),
/// [`undo_move`](Self::undo_move) and [`reset_round`](Self::reset_round).
/// Each call either fully succeeds or returns an error without touching
/// any state, which keeps these invariants:
/// - `history().len()` equals the number of stones on the board
/// - `turn()` is Black exactly when the history length is even, except
///   after a winning move, where it stays with the winner
/// - `status()` is `Won` only if the last move made five in a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    history: Vec<Move>,
    turn: Stone,
    status: RoundStatus,
    scoreboard: Scoreboard,
    winning_line: Option<Vec<Pos>>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Fresh session: empty board, Black to move, 0:0
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::with_capacity(TOTAL_CELLS),
            turn: Stone::Black,
            status: RoundStatus::InProgress,
            scoreboard: Scoreboard::new(),
            winning_line: None,
        }
    }

    /// Place the current player's stone at (row, col).
    ///
    /// On a win the scoreboard is credited and the turn does not pass.
    /// Bounds are checked first, so off-board input after a win reports
    /// `OutOfBounds` rather than `RoundOver`.
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        let pos = Pos::try_new(row, col).ok_or_else(|| {
            trace!("rejected move ({}, {}): off the board", row, col);
            MoveError::OutOfBounds { row, col }
        })?;
        self.play(pos)
    }

    /// Same as [`apply_move`](Self::apply_move) for an already valid position
    pub fn play(&mut self, pos: Pos) -> Result<MoveOutcome, MoveError> {
        if let RoundStatus::Won(winner) = self.status {
            trace!("rejected move {}: round already won by {}", pos, winner);
            return Err(MoveError::RoundOver { winner });
        }
        if !self.board.is_empty(pos) {
            trace!("rejected move {}: occupied", pos);
            return Err(MoveError::Occupied { pos });
        }

        let player = self.turn;
        self.board.place_stone(pos, player);
        self.history.push(Move { pos, player });
        debug!("move #{}: {} at {}", self.history.len(), player, pos);

        if has_five_at_pos(&self.board, pos, player) {
            self.status = RoundStatus::Won(player);
            self.scoreboard.record_win(player);
            self.winning_line = find_five_line_at_pos(&self.board, pos, player);
            info!(
                "{} wins after {} moves (score {}:{})",
                player,
                self.history.len(),
                self.scoreboard.black(),
                self.scoreboard.white()
            );
            return Ok(MoveOutcome::Win { winner: player });
        }

        self.turn = player.opponent();
        Ok(MoveOutcome::Continue { next: self.turn })
    }

    /// Take back the most recent move; it becomes that player's turn again.
    ///
    /// Refused once the round is won.
    pub fn undo_move(&mut self) -> Result<Move, UndoError> {
        if let RoundStatus::Won(winner) = self.status {
            trace!("rejected undo: round already won by {}", winner);
            return Err(UndoError::RoundOver { winner });
        }
        let last = self.history.pop().ok_or_else(|| {
            trace!("rejected undo: no moves");
            UndoError::NoMoves
        })?;

        self.board.remove_stone(last.pos);
        self.turn = last.player;
        self.status = RoundStatus::InProgress;
        self.winning_line = None;
        debug!("undo {} at {}, {} moves left", last.player, last.pos, self.history.len());
        Ok(last)
    }

    /// Start a new round. Scores are kept.
    pub fn reset_round(&mut self) {
        self.board.clear();
        self.history.clear();
        self.turn = Stone::Black;
        self.status = RoundStatus::InProgress;
        self.winning_line = None;
        info!(
            "new round (score {}:{})",
            self.scoreboard.black(),
            self.scoreboard.white()
        );
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn cell(&self, pos: Pos) -> Stone {
        self.board.get(pos)
    }

    /// Player to move next. After a win this is still the winner.
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.status.winner()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Moves of the current round in play order
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Cells of the winning run, once the round is won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// True if the board is full and nobody has won
    pub fn is_stalemate(&self) -> bool {
        !self.is_over() && self.board.is_full()
    }
}
