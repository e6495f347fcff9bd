//! Read-only view of a game for renderers.
//!
//! Renderers never touch `GameState` directly; they get a snapshot that can
//! be refilled every frame without reallocating.

use arrayvec::ArrayVec;

use crate::piece::{Mask, Piece, MASK_CELLS};
use crate::types::{Cell, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub mask: Mask,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            mask: value.mask,
            x: value.x,
            y: value.y,
        }
    }
}

impl PieceSnapshot {
    /// Occupied cells in board coordinates
    pub fn cells(&self) -> ArrayVec<(i32, i32), MASK_CELLS> {
        Piece::from(*self).cells()
    }
}

impl From<PieceSnapshot> for Piece {
    fn from(value: PieceSnapshot) -> Self {
        Self {
            kind: value.kind,
            mask: value.mask,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major board cells
    pub board: Vec<Cell>,
    pub piece: Option<PieceSnapshot>,
    pub score: u32,
}

impl GameSnapshot {
    /// Locked cell at `(x, y)`, `None` when empty or out of range
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .flatten()
    }
}
