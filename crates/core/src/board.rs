//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! kind of the piece that was locked there (which also gives its color).
//! Storage is a flat row-major `Vec`, allocated once per board.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom, row 0 is the top).

use crate::piece::Piece;
use crate::types::Cell;

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Whether `piece`, moved by `(dx, dy)`, would hit a wall, the floor, or a
    /// locked cell.
    ///
    /// Cells above the top edge (row < 0) only count against the side walls and
    /// the floor, never against locked cells. That lets a piece spawn partly
    /// above the board.
    pub fn check_collision(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece.offsets().any(|(mx, my)| {
            let x = piece.x + mx + dx;
            let y = piece.y + my + dy;
            x < 0
                || x >= self.width as i32
                || y >= self.height as i32
                || (y >= 0 && self.is_occupied(x, y))
        })
    }

    /// Write the piece's cells into the board, colored by its kind.
    ///
    /// Callers must first confirm `!check_collision(piece, 0, 0)`. Cells that
    /// fall outside the board (including rows above the top) are not written.
    pub fn lock(&mut self, piece: &Piece) {
        debug_assert!(
            !self.check_collision(piece, 0, 0),
            "locking a piece that collides: {:?} at ({}, {})",
            piece.kind,
            piece.x,
            piece.y
        );

        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Single compaction pass from the bottom up: rows that are not full are
    /// copied down to a write cursor, full rows are skipped, and the rows left
    /// above the cursor are blanked. Relative order of the kept rows does not
    /// change, and rows that only become adjacent after a removal are still
    /// examined because every source row is read exactly once.
    pub fn clear_lines(&mut self) -> u32 {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }

            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Whether no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
