//! Terminal renderer for blockfall.
//!
//! Rendering is split in two: `GameView` paints a `GameSnapshot` into a plain
//! framebuffer (pure, unit-testable), and `TerminalRenderer` flushes that
//! framebuffer to the terminal, writing only what changed between frames.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BlockLayout, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
