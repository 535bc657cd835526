//! Board structure

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board, one bitboard per color
///
/// A cell is never set in both bitboards: `place_stone` only writes to
/// empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone on an empty cell. Returns false (and leaves the board
    /// untouched) if the cell is occupied or `stone` is `Empty`.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => return false,
        }
        true
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Remove every stone
    pub fn clear(&mut self) {
        self.black = Bitboard::new();
        self.white = Bitboard::new();
    }

    /// Occupied cells only: Black stones then White, each in index order
    pub fn placed_stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        [Stone::Black, Stone::White].into_iter().flat_map(move |stone| {
            self.stones(stone)
                .into_iter()
                .flat_map(|bb| bb.iter_ones())
                .map(move |pos| (pos, stone))
        })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        (0..TOTAL_CELLS).map(move |idx| {
            let pos = Pos::from_index(idx);
            (pos, self.get(pos))
        })
    }

    /// Snapshot as a plain grid, indexed `[row][col]`
    pub fn to_grid(&self) -> [[Stone; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (pos, stone) in self.cells() {
            grid[pos.row as usize][pos.col as usize] = stone;
        }
        grid
    }
}
