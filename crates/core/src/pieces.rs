//! Pieces module - tetromino shapes and per-kind rotation rules
//!
//! Offsets are (dx, dy) relative to the piece anchor, with y growing downward.
//! Each kind maps to a [`RotationRule`]:
//!
//! - **O** never changes shape.
//! - **I** steps through four precomputed offset sets. The current set is
//!   located by value, so an offset set that is not in the table does not rotate.
//! - **J, L, S, T, Z** rotate a quarter turn about the anchor:
//!   clockwise `(x, y) -> (-y, x)`, counter-clockwise `(x, y) -> (y, -x)`.

use crate::types::{PieceKind, Spin};

/// Offset of a single mino relative to piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// How a piece kind turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationRule {
    /// Shape never changes.
    Fixed,
    /// Ordered clockwise cycle of offset sets.
    Cycle(&'static [PieceShape; 4]),
    /// Quarter-turn transform about the anchor.
    Pivot,
}

/// I piece orientations in clockwise order.
///
/// The spawn state sits one row above the anchor so that at the spawn anchor
/// (4, 1) the bar occupies row 0, columns 3..=6.
pub const I_STATES: [PieceShape; 4] = [
    [(-1, -1), (0, -1), (1, -1), (2, -1)],
    [(1, -1), (1, 0), (1, 1), (1, 2)],
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
];

const O_SHAPE: PieceShape = [(0, -1), (1, -1), (0, 0), (1, 0)];
const T_SHAPE: PieceShape = [(0, -1), (-1, 0), (0, 0), (1, 0)];
const S_SHAPE: PieceShape = [(0, -1), (1, -1), (-1, 0), (0, 0)];
const Z_SHAPE: PieceShape = [(-1, -1), (0, -1), (0, 0), (1, 0)];
const J_SHAPE: PieceShape = [(-1, -1), (-1, 0), (0, 0), (1, 0)];
const L_SHAPE: PieceShape = [(1, -1), (-1, 0), (0, 0), (1, 0)];

/// Canonical spawn offsets for a piece kind
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => I_STATES[0],
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Rotation rule for a piece kind
pub fn rotation_rule(kind: PieceKind) -> RotationRule {
    match kind {
        PieceKind::O => RotationRule::Fixed,
        PieceKind::I => RotationRule::Cycle(&I_STATES),
        PieceKind::T | PieceKind::S | PieceKind::Z | PieceKind::J | PieceKind::L => {
            RotationRule::Pivot
        }
    }
}

/// Turn `shape` a quarter turn according to the rules of `kind`.
///
/// Returns `None` when `kind` cycles through a table and `shape` is not one
/// of its entries. Board legality is not checked here.
pub fn rotate_shape(kind: PieceKind, shape: &PieceShape, spin: Spin) -> Option<PieceShape> {
    match rotation_rule(kind) {
        RotationRule::Fixed => Some(*shape),
        RotationRule::Cycle(states) => {
            let idx = states.iter().position(|s| s == shape)?;
            let next = match spin {
                Spin::Cw => (idx + 1) % states.len(),
                Spin::Ccw => (idx + states.len() - 1) % states.len(),
            };
            Some(states[next])
        }
        RotationRule::Pivot => Some(shape.map(|(x, y)| match spin {
            Spin::Cw => (-y, x),
            Spin::Ccw => (y, -x),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_unique_cells() {
        for kind in PieceKind::ALL {
            let mut shape = spawn_shape(kind);
            for _ in 0..4 {
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(shape[i], shape[j], "{kind:?} has duplicate cells");
                    }
                }
                shape = rotate_shape(kind, &shape, Spin::Cw).unwrap();
            }
        }
    }

    #[test]
    fn test_pivot_cw_then_ccw_is_identity() {
        let t = spawn_shape(PieceKind::T);
        let cw = rotate_shape(PieceKind::T, &t, Spin::Cw).unwrap();
        assert_eq!(cw, [(1, 0), (0, -1), (0, 0), (0, 1)]);
        assert_eq!(rotate_shape(PieceKind::T, &cw, Spin::Ccw), Some(t));
    }

    #[test]
    fn test_i_ccw_from_spawn_wraps_to_last_state() {
        assert_eq!(
            rotate_shape(PieceKind::I, &I_STATES[0], Spin::Ccw),
            Some(I_STATES[3])
        );
    }

    #[test]
    fn test_unknown_i_offsets_do_not_rotate() {
        let bogus = spawn_shape(PieceKind::T);
        assert_eq!(rotate_shape(PieceKind::I, &bogus, Spin::Cw), None);
    }
}
