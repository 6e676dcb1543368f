//! Board module tests

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_out_of_bounds_access() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.is_valid(-1, 5));
    assert!(Board::is_out_of_bounds(10, 0));
    assert!(!Board::is_out_of_bounds(9, 19));
}

#[test]
fn test_set_and_occupancy() {
    let mut board = Board::new();
    assert!(board.set(3, 7, Some(PieceKind::L)));
    assert!(board.is_occupied(3, 7));
    assert!(!board.is_valid(3, 7));
    assert_eq!(board.get(3, 7), Some(Some(PieceKind::L)));
    assert!(board.is_valid(4, 7));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_is_occupied_panics_off_board() {
    Board::new().is_occupied(0, 20);
}

#[test]
fn test_clear_row_only_empties_that_row() {
    let mut board = Board::new();
    fill_row(&mut board, 18, PieceKind::O);
    fill_row(&mut board, 19, PieceKind::I);

    assert_eq!(board.clear_row(19), 1);
    assert!(board.row(19).iter().all(|c| c.is_none()));
    assert!(board.is_row_full(18));
    assert_eq!(board.clear_row(20), 0);
}

#[test]
fn test_clear_non_contiguous_rows() {
    let mut board = Board::new();
    for y in [5, 7, 8] {
        fill_row(&mut board, y, PieceKind::S);
    }
    board.set(2, 6, Some(PieceKind::T));
    board.set(4, 4, Some(PieceKind::J));
    board.set(0, 19, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[8, 7, 5]);

    // Row 6 had two cleared rows below it, row 4 had three.
    assert_eq!(board.get(2, 8), Some(Some(PieceKind::T)));
    assert_eq!(board.get(4, 7), Some(Some(PieceKind::J)));
    // Nothing below the lowest cleared row moves.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::Z)));

    let filled = board.cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(filled, 3);
}

#[test]
fn test_clear_including_top_row() {
    let mut board = Board::new();
    fill_row(&mut board, 0, PieceKind::I);
    fill_row(&mut board, 1, PieceKind::I);
    board.set(5, 1, None);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[0]);
    assert!(board.row(0).iter().all(|c| c.is_none()));
    assert_eq!(board.row(1).iter().filter(|c| c.is_some()).count(), 9);
}

#[test]
fn test_u8_grid_uses_identity_tags() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::I));
    board.set(9, 0, Some(PieceKind::L));

    let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_u8_grid(&mut grid);

    assert_eq!(grid[19][0], PieceKind::I.tag());
    assert_eq!(grid[0][9], PieceKind::L.tag());
    assert_eq!(grid[10][5], 0);
}
