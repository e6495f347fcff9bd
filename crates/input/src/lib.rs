//! Terminal input mapping.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Input is
//! edge-triggered: each key press yields at most one action and terminal
//! auto-repeat is ignored, so holding a key does not slide the piece.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
