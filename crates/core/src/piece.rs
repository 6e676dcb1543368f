//! The falling piece as a value type.
//!
//! Every transformation returns a new [`Tetromino`]; the game state decides
//! whether to keep it after asking [`crate::placement`] about legality.

use crate::pieces::{rotate_shape, spawn_shape, PieceShape};
use crate::types::{PieceKind, Spin, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Mino offsets relative to (x, y)
    pub shape: PieceShape,
    pub x: i8,
    pub y: i8,
}

/// Bounding box of a piece's absolute cells (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub min_x: i8,
    pub max_x: i8,
    pub min_y: i8,
    pub max_y: i8,
}

impl Tetromino {
    /// Create a new tetromino in its canonical orientation at the spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Canonical orientation at an arbitrary anchor
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            x,
            y,
        }
    }

    /// Absolute grid coordinates of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn extent(&self) -> Extent {
        let cells = self.cells();
        let mut extent = Extent {
            min_x: cells[0].0,
            max_x: cells[0].0,
            min_y: cells[0].1,
            max_y: cells[0].1,
        };
        for &(x, y) in &cells[1..] {
            extent.min_x = extent.min_x.min(x);
            extent.max_x = extent.max_x.max(x);
            extent.min_y = extent.min_y.min(y);
            extent.max_y = extent.max_y.max(y);
        }
        extent
    }

    /// Largest row offset among the minos
    pub fn lowest(&self) -> i8 {
        self.shape.iter().map(|&(_, dy)| dy).max().unwrap_or(0)
    }

    /// Smallest column offset among the minos
    pub fn leftmost(&self) -> i8 {
        self.shape.iter().map(|&(dx, _)| dx).min().unwrap_or(0)
    }

    /// Largest column offset among the minos
    pub fn rightmost(&self) -> i8 {
        self.shape.iter().map(|&(dx, _)| dx).max().unwrap_or(0)
    }

    /// Same piece translated by (dx, dy)
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece turned a quarter turn; `None` if the kind's rules cannot
    /// turn the current offsets.
    pub fn rotated(&self, spin: Spin) -> Option<Self> {
        let shape = rotate_shape(self.kind, &self.shape, spin)?;
        Some(Self { shape, ..*self })
    }

    pub fn rotated_cw(&self) -> Option<Self> {
        self.rotated(Spin::Cw)
    }

    pub fn rotated_ccw(&self) -> Option<Self> {
        self.rotated(Spin::Ccw)
    }
}
