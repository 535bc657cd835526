//! Win condition checking
//!
//! The check is local to the stone just placed: each of the four lines
//! through it is walked at most `WIN_LENGTH - 1` cells in both directions,
//! so the cost does not depend on how full the board is.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal "\"
    (1, -1), // Diagonal "/"
];

/// Count consecutive `color` stones from `pos` along (dr, dc), not
/// counting `pos` itself. Stops at the board edge, a non-matching cell,
/// or after `WIN_LENGTH - 1` steps.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    (1..WIN_LENGTH as i32)
        .map_while(|step| pos.offset(dr, dc, step))
        .take_while(|&p| board.get(p) == color)
        .count()
}

/// Five-in-a-row check rooted at a specific position.
///
/// `pos` is treated as holding `color` whatever the board says, so this can
/// be asked before or after the stone is placed. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, dr, dc, color) + run_length(board, pos, -dr, -dc, color)
            >= WIN_LENGTH
    })
}

/// Find the run through `pos` that makes five, if any.
///
/// Returns the contiguous cells found by the bounded scan, ordered from
/// the backward end to the forward end. The line has at least
/// `WIN_LENGTH` cells; an overline is clipped to the scan window.
pub fn find_five_line_at_pos(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty {
        return None;
    }
    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, -dr, -dc, color);
        let forward = run_length(board, pos, dr, dc, color);
        if 1 + back + forward < WIN_LENGTH {
            continue;
        }

        let line = (-(back as i32)..=forward as i32)
            .filter_map(|step| pos.offset(dr, dc, step))
            .collect();
        return Some(line);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_line(board: &mut Board, start: Pos, dr: i32, dc: i32, len: i32, color: Stone) {
        for i in 0..len {
            let p = start.offset(dr, dc, i).unwrap();
            board.place_stone(p, color);
        }
    }

    #[test]
    fn test_five_horizontal() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(7, 3), 0, 1, 5, Stone::Black);
        // Any stone of the line detects it
        for col in 3..8 {
            assert!(has_five_at_pos(&board, Pos::new(7, col), Stone::Black));
        }
        assert!(!has_five_at_pos(&board, Pos::new(7, 5), Stone::White));
    }

    #[test]
    fn test_five_vertical() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(2, 9), 1, 0, 5, Stone::White);
        assert!(has_five_at_pos(&board, Pos::new(4, 9), Stone::White));
    }

    #[test]
    fn test_five_diagonal_se() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(10, 10), 1, 1, 5, Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(14, 14), Stone::Black));
    }

    #[test]
    fn test_five_diagonal_sw() {
        let mut board = Board::new();
        // Diagonal from (4, 8) to (8, 4)
        place_line(&mut board, Pos::new(4, 8), 1, -1, 5, Stone::White);
        assert!(has_five_at_pos(&board, Pos::new(6, 6), Stone::White));
    }

    #[test]
    fn test_four_is_not_five() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(7, 3), 0, 1, 4, Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(7, 6), Stone::Black));
    }

    #[test]
    fn test_blocked_four_at_edge() {
        let mut board = Board::new();
        // Edge on the left, White on the right
        place_line(&mut board, Pos::new(0, 0), 0, 1, 4, Stone::Black);
        board.place_stone(Pos::new(0, 4), Stone::White);
        assert!(!has_five_at_pos(&board, Pos::new(0, 0), Stone::Black));
        assert!(!has_five_at_pos(&board, Pos::new(0, 3), Stone::Black));
    }

    #[test]
    fn test_broken_line_is_not_five() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(5, 0), 0, 1, 2, Stone::Black);
        place_line(&mut board, Pos::new(5, 3), 0, 1, 3, Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(5, 4), Stone::Black));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(9, 2), 0, 1, 6, Stone::Black);
        // From either end, the bounded scan still sees five
        assert!(has_five_at_pos(&board, Pos::new(9, 2), Stone::Black));
        assert!(has_five_at_pos(&board, Pos::new(9, 7), Stone::Black));
    }

    #[test]
    fn test_pos_counts_as_color_before_placement() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(3, 3), 1, 1, 2, Stone::Black);
        place_line(&mut board, Pos::new(6, 6), 1, 1, 2, Stone::Black);
        // Gap at (5, 5) completes the five
        assert!(has_five_at_pos(&board, Pos::new(5, 5), Stone::Black));
    }

    #[test]
    fn test_empty_color_never_wins() {
        let board = Board::new();
        assert!(!has_five_at_pos(&board, Pos::new(7, 7), Stone::Empty));
        assert!(find_five_line_at_pos(&board, Pos::new(7, 7), Stone::Empty).is_none());
    }

    #[test]
    fn test_find_line_ordered() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(4, 8), 1, -1, 5, Stone::White);
        let line = find_five_line_at_pos(&board, Pos::new(6, 6), Stone::White).unwrap();
        assert_eq!(
            line,
            vec![
                Pos::new(4, 8),
                Pos::new(5, 7),
                Pos::new(6, 6),
                Pos::new(7, 5),
                Pos::new(8, 4),
            ]
        );
    }

    #[test]
    fn test_find_line_clips_overline() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(7, 0), 0, 1, 15, Stone::Black);
        let line = find_five_line_at_pos(&board, Pos::new(7, 7), Stone::Black).unwrap();
        // 4 back + center + 4 forward
        assert_eq!(line.len(), 9);
        assert_eq!(line.first(), Some(&Pos::new(7, 3)));
        assert_eq!(line.last(), Some(&Pos::new(7, 11)));
    }

    #[test]
    fn test_no_line_without_five() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(7, 3), 0, 1, 4, Stone::Black);
        assert!(find_five_line_at_pos(&board, Pos::new(7, 3), Stone::Black).is_none());
    }
}
