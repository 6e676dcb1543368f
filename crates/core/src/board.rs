//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or filled by a piece kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices cleared in one pass. Sized for the whole board so a hand-built
/// test board with many full rows never overflows.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Flat index for a coordinate the caller has already bounds-checked.
    #[inline(always)]
    fn index_checked(x: i8, y: i8) -> usize {
        match Self::index(x, y) {
            Some(idx) => idx,
            None => panic!("board index ({x}, {y}) out of bounds"),
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Check if position lies outside the 10x20 grid
    #[inline(always)]
    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if an in-bounds position is filled.
    ///
    /// # Panics
    ///
    /// Panics when (x, y) is outside the board. Callers bounds-check first.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.cells[Self::index_checked(x, y)].is_some()
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Mark an in-bounds cell as filled by `kind`.
    ///
    /// # Panics
    ///
    /// Panics when (x, y) is outside the board.
    pub fn lock_cell(&mut self, x: i8, y: i8, kind: PieceKind) {
        debug_assert!(
            !self.is_occupied(x, y),
            "locking over an occupied cell at ({x}, {y})"
        );
        self.cells[Self::index_checked(x, y)] = Some(kind);
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Empty a single row without moving anything else.
    /// Returns the number of lines cleared (1 or 0), which the caller scores.
    pub fn clear_row(&mut self, y: usize) -> u32 {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize].fill(None);
        1
    }

    /// Remove `cleared` rows and let everything above fall into the gap.
    ///
    /// Every surviving row moves down by the number of cleared rows strictly
    /// below it; the vacated rows at the top become empty. The rows need not be
    /// contiguous or sorted, and may include row 0.
    pub fn compact(&mut self, cleared: &[usize]) {
        let height = BOARD_HEIGHT as usize;
        let width = BOARD_WIDTH as usize;

        let mut removed = [false; BOARD_HEIGHT as usize];
        for &y in cleared {
            if y < height {
                removed[y] = true;
            }
        }

        // Walk upwards with a write cursor that only advances on kept rows.
        let mut write_y = height;
        for read_y in (0..height).rev() {
            if removed[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
    }

    /// Indices of every full row, bottom to top
    pub fn full_rows(&self) -> ClearedRows {
        (0..BOARD_HEIGHT as usize)
            .rev()
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Clear all full rows and compact the board.
    /// Returns the cleared row indices (bottom to top).
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let rows = self.full_rows();
        for &y in &rows {
            self.clear_row(y);
        }
        self.compact(&rows);
        rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export the board as identity tags (0 = empty, 1..=7 = piece kind).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, tag) in row.iter_mut().enumerate() {
                *tag = self.cells[y * BOARD_WIDTH as usize + x].map_or(0, |k| k.tag());
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from a 2D vector for testing
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        (0..BOARD_HEIGHT as usize)
            .map(|y| self.row(y).to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
