//! Piece module - tetromino masks and the 90° rotation transform
//!
//! A piece is a 4x4 occupancy mask plus a kind and an anchor. The anchor is the
//! board coordinate of the mask's top-left corner. Masks are plain arrays, so
//! every `Piece` owns its own copy and rotating one never touches another.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, MASK_SIZE};

/// 4x4 occupancy grid, indexed `[y][x]`
pub type Mask = [[bool; MASK_SIZE]; MASK_SIZE];

/// Upper bound on occupied cells in any mask
pub const MASK_CELLS: usize = MASK_SIZE * MASK_SIZE;

const X: bool = true;
const O: bool = false;

/// Spawn templates, in [`PieceKind::ALL`] order
const TEMPLATES: [Mask; 7] = [
    // I
    [[X, X, X, X], [O, O, O, O], [O, O, O, O], [O, O, O, O]],
    // Z
    [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    // S
    [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    // T
    [[X, X, X, O], [O, X, O, O], [O, O, O, O], [O, O, O, O]],
    // O
    [[X, X, O, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    // L
    [[X, X, X, O], [X, O, O, O], [O, O, O, O], [O, O, O, O]],
    // J
    [[X, X, X, O], [O, O, X, O], [O, O, O, O], [O, O, O, O]],
];

/// Spawn mask for a piece kind
pub fn template(kind: PieceKind) -> Mask {
    TEMPLATES[kind.index()]
}

/// Rotate a mask by 90°: source `(y, x)` lands on `(x, 3 - y)`.
///
/// Four applications return the original mask.
pub fn rotate_mask(mask: &Mask) -> Mask {
    let mut rotated = [[false; MASK_SIZE]; MASK_SIZE];
    for (y, row) in mask.iter().enumerate() {
        for (x, &filled) in row.iter().enumerate() {
            rotated[x][MASK_SIZE - 1 - y] = filled;
        }
    }
    rotated
}

/// Number of occupied cells in a mask
pub fn mask_len(mask: &Mask) -> usize {
    mask.iter().flatten().filter(|&&filled| filled).count()
}

/// Falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub mask: Mask,
    /// Board column of the mask's left edge
    pub x: i32,
    /// Board row of the mask's top edge (may be negative while spawning)
    pub y: i32,
}

impl Piece {
    /// Create a piece with the kind's template mask at the given anchor
    pub fn spawn(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            mask: template(kind),
            x,
            y,
        }
    }

    /// Rotate in place. Does not check the board.
    pub fn rotate(&mut self) {
        self.mask = rotate_mask(&self.mask);
    }

    /// Rotated copy. Does not check the board.
    pub fn rotated(&self) -> Self {
        Self {
            mask: rotate_mask(&self.mask),
            ..*self
        }
    }

    /// Copy moved by `(dx, dy)`
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Occupied cells as offsets inside the mask, row by row
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.mask.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(x, _)| (x as i32, y as i32))
        })
    }

    /// Occupied cells in absolute board coordinates `(x, y)`
    pub fn cells(&self) -> ArrayVec<(i32, i32), MASK_CELLS> {
        self.offsets()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}
