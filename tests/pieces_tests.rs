//! Piece shape and rotation tests

use blockfall::core::pieces::I_STATES;
use blockfall::core::{rotate_shape, rotation_rule, spawn_shape, RotationRule, Tetromino};
use blockfall::types::{PieceKind, Spin, SPAWN_X, SPAWN_Y};

#[test]
fn test_four_clockwise_turns_return_to_spawn() {
    for kind in PieceKind::ALL {
        let start = spawn_shape(kind);
        let mut shape = start;
        for _ in 0..4 {
            shape = rotate_shape(kind, &shape, Spin::Cw).unwrap();
        }
        assert_eq!(shape, start, "{kind:?}");
    }
}

#[test]
fn test_counter_clockwise_undoes_clockwise() {
    for kind in PieceKind::ALL {
        let start = spawn_shape(kind);
        let cw = rotate_shape(kind, &start, Spin::Cw).unwrap();
        assert_eq!(rotate_shape(kind, &cw, Spin::Ccw), Some(start), "{kind:?}");
    }
}

#[test]
fn test_i_cycles_through_table() {
    assert_eq!(rotation_rule(PieceKind::I), RotationRule::Cycle(&I_STATES));

    let mut shape = spawn_shape(PieceKind::I);
    for step in 1..=4 {
        shape = rotate_shape(PieceKind::I, &shape, Spin::Cw).unwrap();
        assert_eq!(shape, I_STATES[step % 4]);
    }

    for i in 0..4 {
        for j in (i + 1)..4 {
            assert_ne!(I_STATES[i], I_STATES[j]);
        }
    }
}

#[test]
fn test_i_unknown_offsets_do_not_rotate() {
    let bogus = [(0, 0), (1, 0), (2, 0), (3, 0)];
    assert_eq!(rotate_shape(PieceKind::I, &bogus, Spin::Cw), None);
}

#[test]
fn test_o_never_changes() {
    let o = spawn_shape(PieceKind::O);
    assert_eq!(rotation_rule(PieceKind::O), RotationRule::Fixed);
    assert_eq!(rotate_shape(PieceKind::O, &o, Spin::Cw), Some(o));
    assert_eq!(rotate_shape(PieceKind::O, &o, Spin::Ccw), Some(o));
}

#[test]
fn test_pivot_kinds_use_quarter_turn() {
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        let shape = spawn_shape(kind);
        let expected = shape.map(|(x, y)| (-y, x));
        assert_eq!(rotate_shape(kind, &shape, Spin::Cw), Some(expected), "{kind:?}");
    }
}

#[test]
fn test_spawn_cells() {
    let i = Tetromino::new(PieceKind::I);
    assert_eq!((i.x, i.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(i.cells(), [(3, 0), (4, 0), (5, 0), (6, 0)]);

    for kind in PieceKind::ALL {
        let piece = Tetromino::new(kind);
        for (x, y) in piece.cells() {
            assert!((0..10).contains(&x) && (0..2).contains(&y), "{kind:?} spawns at ({x}, {y})");
        }
    }
}
