//! Collision and placement checks shared by every piece command.
//!
//! Commands build a candidate piece as a new value, test it with
//! [`is_legal`], and only then replace the stored piece. A rejected candidate
//! is dropped, so the stored piece never holds an illegal state.

use crate::board::Board;
use crate::piece::Tetromino;

/// True iff every mino is inside the board and on an empty cell.
pub fn is_legal(piece: &Tetromino, board: &Board) -> bool {
    piece
        .cells()
        .iter()
        .all(|&(x, y)| !Board::is_out_of_bounds(x, y) && !board.is_occupied(x, y))
}

/// Apply `change` to a copy of `piece` and return the result if it is legal.
///
/// `change` may itself decline (e.g. an unrotatable offset set) by returning
/// `None`.
pub fn try_apply(
    piece: &Tetromino,
    board: &Board,
    change: impl FnOnce(&Tetromino) -> Option<Tetromino>,
) -> Option<Tetromino> {
    change(piece).filter(|candidate| is_legal(candidate, board))
}

/// Number of rows `piece` can fall before the next step down is illegal.
pub fn drop_distance(piece: &Tetromino, board: &Board) -> i8 {
    let mut current = *piece;
    let mut distance = 0;
    while let Some(next) = try_apply(&current, board, |p| Some(p.moved(0, 1))) {
        current = next;
        distance += 1;
    }
    distance
}

/// Where `piece` comes to rest if dropped straight down.
pub fn landing_position(piece: &Tetromino, board: &Board) -> Tetromino {
    piece.moved(0, drop_distance(piece, board))
}

/// Whether the piece has something directly beneath it
pub fn is_grounded(piece: &Tetromino, board: &Board) -> bool {
    !is_legal(&piece.moved(0, 1), board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_spawned_piece_is_legal_on_empty_board() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(is_legal(&Tetromino::new(kind), &board), "{kind:?}");
        }
    }

    #[test]
    fn test_out_of_bounds_is_illegal() {
        let board = Board::new();
        let piece = Tetromino::new(PieceKind::I);

        assert!(!is_legal(&piece.moved(-4, 0), &board));
        assert!(!is_legal(&piece.moved(4, 0), &board));
        assert!(!is_legal(&piece.moved(0, -1), &board));
        assert!(!is_legal(&piece.moved(0, 20), &board));
    }

    #[test]
    fn test_overlap_is_illegal() {
        let mut board = Board::new();
        board.set(5, 0, Some(PieceKind::Z));
        assert!(!is_legal(&Tetromino::new(PieceKind::I), &board));
    }

    #[test]
    fn test_legality_matches_bounds_and_occupancy_everywhere() {
        let mut board = Board::new();
        let mut filled = std::collections::HashSet::new();
        for (x, y) in [(0, 19), (4, 19), (9, 19), (2, 12), (7, 8), (5, 3), (1, 0), (8, 1)] {
            board.set(x, y, Some(PieceKind::S));
            filled.insert((x, y));
        }

        let expected = |piece: &Tetromino| {
            piece.cells().iter().all(|&(x, y)| {
                (0..10).contains(&x) && (0..20).contains(&y) && !filled.contains(&(x, y))
            })
        };

        for kind in PieceKind::ALL {
            let mut shape_piece = Tetromino::new(kind);
            for _ in 0..4 {
                for ay in -3..23 {
                    for ax in -3..13 {
                        let piece = Tetromino { x: ax, y: ay, ..shape_piece };
                        assert_eq!(
                            is_legal(&piece, &board),
                            expected(&piece),
                            "{kind:?} {:?} at ({ax}, {ay})",
                            piece.shape
                        );
                    }
                }
                shape_piece = shape_piece.rotated_cw().unwrap();
            }
        }
    }

    #[test]
    fn test_try_apply_rejects_without_touching_input() {
        let board = Board::new();
        let piece = Tetromino::new(PieceKind::J);
        let result = try_apply(&piece, &board, |p| Some(p.moved(0, -5)));

        assert_eq!(result, None);
        assert_eq!(piece, Tetromino::new(PieceKind::J));
    }

    #[test]
    fn test_drop_distance_on_empty_board() {
        let board = Board::new();
        let piece = Tetromino::new(PieceKind::I);

        assert_eq!(drop_distance(&piece, &board), 19);
        let landed = landing_position(&piece, &board);
        assert!(landed.cells().iter().all(|&(_, y)| y == 19));
        assert!(is_grounded(&landed, &board));
    }
}
