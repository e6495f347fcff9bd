//! Board tests - collision, lock, and line clearing

use blockfall::core::{Board, Piece};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i32) {
    for x in 0..board.width() as i32 {
        board.set(x, y, Some(PieceKind::I));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert!(board.is_empty());

    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_board_get_set_out_of_bounds() {
    let mut board = Board::new(10, 20);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 20), None);

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, 20, Some(PieceKind::T)));
    assert!(board.is_empty());
}

#[test]
fn test_collision_exempts_rows_above_board() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 0);

    // I piece lying flat at row -1: every cell is above the board.
    let piece = Piece::spawn(PieceKind::I, 3, -1);
    assert!(!board.check_collision(&piece, 0, 0));

    // One row down it overlaps the filled top row.
    assert!(board.check_collision(&piece, 0, 1));
}

#[test]
fn test_collision_above_board_still_checks_walls() {
    let board = Board::new(10, 20);
    let piece = Piece::spawn(PieceKind::I, -1, -2);
    assert!(board.check_collision(&piece, 0, 0));

    let piece = Piece::spawn(PieceKind::I, 7, -2);
    assert!(board.check_collision(&piece, 0, 0));
    assert!(!board.check_collision(&piece, -1, 0));
}

#[test]
fn test_collision_with_floor() {
    let board = Board::new(10, 20);
    let piece = Piece::spawn(PieceKind::O, 0, 18);
    assert!(!board.check_collision(&piece, 0, 0));
    assert!(board.check_collision(&piece, 0, 1));
}

#[test]
fn test_lock_writes_exactly_the_mask_cells() {
    let mut board = Board::new(10, 20);
    let piece = Piece::spawn(PieceKind::T, 4, 10);
    board.lock(&piece);

    let expected = [(4, 10), (5, 10), (6, 10), (5, 11)];
    for y in 0..20 {
        for x in 0..10 {
            let cell = board.get(x, y).unwrap();
            if expected.contains(&(x, y)) {
                assert_eq!(cell, Some(PieceKind::T), "({x}, {y}) should be locked");
            } else {
                assert_eq!(cell, None, "({x}, {y}) should be empty");
            }
        }
    }
}

#[test]
fn test_lock_skips_cells_above_board() {
    let mut board = Board::new(10, 20);
    // O at y = -1: top row is above the board, bottom row lands on row 0.
    board.lock(&Piece::spawn(PieceKind::O, 3, -1));

    assert_eq!(board.get(3, 0), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 0), Some(Some(PieceKind::O)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_clear_lines_multiple_rows() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 18);
    fill_row(&mut board, 19);
    board.set(0, 17, Some(PieceKind::S));

    assert_eq!(board.clear_lines(), 2);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::S)));
    for y in 0..20 {
        assert!(!board.is_row_full(y));
    }
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_clear_lines_adjacent_four_rows() {
    let mut board = Board::new(10, 20);
    for y in 16..20 {
        fill_row(&mut board, y);
    }
    assert_eq!(board.clear_lines(), 4);
    assert!(board.is_empty());
}

#[test]
fn test_clear_lines_non_adjacent_rows_shift_marker() {
    let mut board = Board::new(10, 20);
    board.set(2, 5, Some(PieceKind::J));
    fill_row(&mut board, 10);
    fill_row(&mut board, 15);

    assert_eq!(board.clear_lines(), 2);
    assert_eq!(board.get(2, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.get(2, 5), Some(None));
}

#[test]
fn test_clear_lines_keeps_partial_rows_in_order() {
    let mut board = Board::new(10, 20);
    board.set(0, 12, Some(PieceKind::Z));
    fill_row(&mut board, 13);
    board.set(1, 14, Some(PieceKind::L));
    fill_row(&mut board, 15);

    assert_eq!(board.clear_lines(), 2);
    assert_eq!(board.get(0, 14), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(1, 15), Some(Some(PieceKind::L)));
}

#[test]
fn test_clear_lines_on_empty_board() {
    let mut board = Board::new(10, 20);
    assert_eq!(board.clear_lines(), 0);
    assert!(board.is_empty());
}

#[test]
fn test_reset_empties_board() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 3);
    board.reset();
    assert!(board.is_empty());
}
