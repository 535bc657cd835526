use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::try_new(3, 4), Some(Pos::new(3, 4)));
    assert_eq!(Pos::try_new(3, 15), None);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 14);
    assert_eq!(pos.offset(1, -1, 2), Some(Pos::new(2, 12)));
    assert_eq!(pos.offset(-1, 0, 1), None);
    assert_eq!(pos.offset(0, 1, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    assert!(board.place_stone(Pos::new(7, 7), Stone::Black));
    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);
    assert_eq!(board.stone_count(), 1);

    // Occupied cells are never overwritten
    assert!(!board.place_stone(Pos::new(7, 7), Stone::White));
    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);

    assert!(!board.place_stone(Pos::new(0, 0), Stone::Empty));
    assert!(board.is_empty(Pos::new(0, 0)));

    board.remove_stone(Pos::new(7, 7));
    assert!(board.is_board_empty());
}

#[test]
fn test_bitboard_iter_last_cell() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(14, 14));
    bb.set(Pos::new(4, 4));
    let ones: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(ones, vec![Pos::new(4, 4), Pos::new(14, 14)]);
}

#[test]
fn test_placed_stones_by_color() {
    let mut board = Board::new();
    board.place_stone(Pos::new(9, 2), Stone::Black);
    board.place_stone(Pos::new(1, 1), Stone::Black);
    board.place_stone(Pos::new(1, 1), Stone::White); // occupied, ignored
    board.place_stone(Pos::new(1, 2), Stone::White);
    board.place_stone(Pos::new(14, 14), Stone::White);

    let placed: Vec<_> = board.placed_stones().collect();
    assert_eq!(
        placed,
        vec![
            (Pos::new(1, 1), Stone::Black),
            (Pos::new(9, 2), Stone::Black),
            (Pos::new(1, 2), Stone::White),
            (Pos::new(14, 14), Stone::White),
        ]
    );
    assert_eq!(placed.len() as u32, board.stone_count());
    assert!(board.stones(Stone::Empty).is_none());
    assert_eq!(Board::new().placed_stones().count(), 0);
}

#[test]
fn test_grid_snapshot_and_clear() {
    let mut board = Board::new();
    board.place_stone(Pos::new(2, 3), Stone::White);
    let grid = board.to_grid();
    assert_eq!(grid[2][3], Stone::White);
    assert_eq!(grid[3][2], Stone::Empty);
    assert_eq!(board.cells().count(), TOTAL_CELLS);

    board.clear();
    assert!(board.is_board_empty());
    assert_eq!(board, Board::new());
}
