use crate::piece::Tetromino;
use crate::pieces::{spawn_shape, PieceShape};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// Absolute board cells
    pub cells: [(i8, i8); 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            cells: value.cells(),
        }
    }
}

/// Read-only copy of everything a renderer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Identity tags, 0 = empty (see `PieceKind::tag`)
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Cells the active piece would occupy after a hard drop
    pub ghost: Option<[(i8, i8); 4]>,
    pub next: PieceKind,
    pub next_shape: PieceShape,
    pub game_over: bool,
    pub seed: u64,
    pub piece_id: u32,
    pub score: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over && self.active.is_some()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost: None,
            next: PieceKind::I,
            next_shape: spawn_shape(PieceKind::I),
            game_over: false,
            seed: 0,
            piece_id: 0,
            score: 0,
            lines: 0,
        }
    }
}
