//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the engine, the input mapping, and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (overridable through `GameConfig`):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn column**: `width / 2 - 2`, so the 4x4 piece box is centered
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 500 | Delay between forced one-row drops |
//! | `TARGET_FPS` | 60 | Frame rate the terminal loop aims for |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_index(3), piece);
//! assert_eq!(piece.as_str(), "t");
//!
//! assert_eq!(GameAction::Rotate.as_str(), "rotate");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Default gravity interval in milliseconds (one row every half second)
pub const GRAVITY_MS: u64 = 500;

/// Default points awarded per cleared row
pub const POINTS_PER_LINE: u32 = 100;

/// Frame rate the interactive loop targets
pub const TARGET_FPS: u32 = 60;

/// Side length of the square bounding box every piece mask lives in
pub const MASK_SIZE: usize = 4;

/// The seven tetromino piece kinds
///
/// Declaration order matches the shape template table, so
/// [`PieceKind::from_index`] and [`PieceKind::index`] round-trip.
/// Each kind is bound to one display color:
/// - **I**: Sky blue, horizontal bar
/// - **Z**: Red
/// - **S**: Green
/// - **T**: Purple
/// - **O**: Yellow, 2x2 square
/// - **L**: Orange
/// - **J**: Blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    Z,
    S,
    T,
    O,
    L,
    J,
}

impl PieceKind {
    /// All kinds in template order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Kind for a template index. Indices wrap modulo 7.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::Z => 1,
            PieceKind::S => 2,
            PieceKind::T => 3,
            PieceKind::O => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }

    /// Display color as `(r, g, b)`
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (102, 191, 255),
            PieceKind::Z => (230, 41, 55),
            PieceKind::S => (0, 228, 48),
            PieceKind::T => (200, 122, 255),
            PieceKind::O => (253, 249, 0),
            PieceKind::L => (255, 161, 0),
            PieceKind::J => (0, 121, 241),
        }
    }
}

/// Player commands the engine understands
///
/// Input is edge-triggered: one action per key press, no auto-repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° (no wall kicks)
    Rotate,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Locked cell, colored like the piece that filled it
pub type Cell = Option<PieceKind>;
