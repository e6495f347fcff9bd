//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It has no dependencies on
//! terminals, input devices, or rendering, so it runs the same headless, in
//! tests, and behind the terminal front end.
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Total**: no engine operation returns an error; a blocked spawn resets
//!   the board instead of ending the game
//! - **Value types**: pieces and masks are `Copy`, so a trial move or rotation
//!   is just a copy checked against the board
//!
//! # Module Structure
//!
//! - [`piece`]: 4x4 piece masks, spawn templates, and the 90° rotation
//! - [`board`]: the cell grid with collision checks, locking, and line clearing
//! - [`game_state`]: the gravity timer and lock → clear → spawn sequence
//! - [`config`]: board size, gravity delay, score per line, spawn point
//! - [`rng`]: seeded piece selection
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Rules
//!
//! - Pieces spawn with their box at column `width / 2 - 2`, row 0
//! - Left, right, down, and rotate are applied only if the result fits
//! - Rotation has no wall kicks: a rotation that does not fit is dropped
//! - Every gravity interval the piece falls one row; if it cannot, it locks,
//!   full rows are cleared for a flat bonus each, and the next piece spawns
//! - If the next piece does not fit, board and score are reset
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use blockfall_core::{GameState, TickOutcome};
//! use blockfall_core::types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new(12345);
//! game.spawn_piece(Some(PieceKind::O));
//!
//! game.apply_action(GameAction::MoveRight);
//! assert_eq!(game.piece().x, 4);
//!
//! // Nothing happens until the gravity delay has passed.
//! assert_eq!(game.update(Duration::from_millis(16)), None);
//! assert_eq!(game.update(Duration::from_millis(500)), Some(TickOutcome::Fell));
//! assert_eq!(game.piece().y, 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game_state::{GameState, TickOutcome};
pub use piece::{mask_len, rotate_mask, template, Mask, Piece};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PieceSnapshot};
