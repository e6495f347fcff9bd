//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Every occupied cell, locked or falling, is drawn as one block. Block `(col,
//! row)` starts at `(col * block_w, row * block_h)` inside the board frame and
//! is `block - gap` wide and tall, so neighbouring blocks stay visually apart.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Size of one board cell on screen, and the part of it left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    pub block_w: u16,
    pub block_h: u16,
    pub gap_w: u16,
    pub gap_h: u16,
}

impl BlockLayout {
    /// Square blocks with the same gap on both axes.
    pub const fn square(size: u16, gap: u16) -> Self {
        Self {
            block_w: size,
            block_h: size,
            gap_w: gap,
            gap_h: gap,
        }
    }

    /// Rectangle `(x, y, w, h)` of a block, relative to the board origin.
    pub fn block_rect(&self, col: u16, row: u16) -> (u16, u16, u16, u16) {
        (
            col.saturating_mul(self.block_w),
            row.saturating_mul(self.block_h),
            self.block_w.saturating_sub(self.gap_w),
            self.block_h.saturating_sub(self.gap_h),
        )
    }

    /// Board area for a `width x height` grid.
    pub fn board_size(&self, width: u16, height: u16) -> (u16, u16) {
        (
            width.saturating_mul(self.block_w),
            height.saturating_mul(self.block_h),
        )
    }
}

impl Default for BlockLayout {
    // Terminal glyphs are about twice as tall as wide: three columns with one
    // blank reads as a roughly square block.
    fn default() -> Self {
        Self {
            block_w: 3,
            block_h: 1,
            gap_w: 1,
            gap_h: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    layout: BlockLayout,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(BlockLayout::default())
    }
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

impl GameView {
    pub fn new(layout: BlockLayout) -> Self {
        Self {
            layout,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self) -> BlockLayout {
        self.layout
    }

    /// Framebuffer size needed to show the whole board and its frame.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let (w, h) = self.layout.board_size(snap.width, snap.height);
        (w.saturating_add(2), h.saturating_add(2))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (board_w, board_h) = self.layout.board_size(snap.width, snap.height);
        let (frame_w, frame_h) = self.frame_size(snap);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let origin = (start_x + 1, start_y + 1);

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: BOARD_BG,
            bold: false,
            dim: false,
        };
        fb.fill_rect(origin.0, origin.1, board_w, board_h, ' ', bg);

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snap.height {
            for col in 0..snap.width {
                match snap.cell(col, row) {
                    Some(kind) => self.draw_block(fb, origin, col, row, kind),
                    None => self.draw_empty(fb, origin, col, row),
                }
            }
        }

        if let Some(piece) = snap.piece {
            for (x, y) in piece.cells() {
                // Cells above the top edge are not shown.
                if x < 0 || y < 0 || x >= snap.width as i32 || y >= snap.height as i32 {
                    continue;
                }
                self.draw_block(fb, origin, x as u16, y as u16, piece.kind);
            }
        }

        let label = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let x = fb.put_str(start_x + 2, start_y, " Score: ", label);
        let x = fb.put_u32(x, start_y, snap.score, label);
        fb.put_char(x, start_y, ' ', label);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: (u16, u16), col: u16, row: u16, kind: PieceKind) {
        let style = CellStyle {
            fg: Rgb::from(kind),
            bg: BOARD_BG,
            bold: true,
            dim: false,
        };
        let (x, y, w, h) = self.layout.block_rect(col, row);
        fb.fill_rect(origin.0.saturating_add(x), origin.1.saturating_add(y), w, h, '█', style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, origin: (u16, u16), col: u16, row: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: BOARD_BG,
            bold: false,
            dim: true,
        };
        let (x, y, w, h) = self.layout.block_rect(col, row);
        if w > 0 && h > 0 {
            fb.put_char(origin.0.saturating_add(x), origin.1.saturating_add(y), '·', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_layout_matches_pixel_geometry() {
        let layout = BlockLayout::square(40, 2);
        assert_eq!(layout.block_rect(3, 5), (120, 200, 38, 38));
        assert_eq!(layout.board_size(10, 20), (400, 800));
    }

    #[test]
    fn default_layout_leaves_one_column_gap() {
        let layout = BlockLayout::default();
        assert_eq!(layout.block_rect(2, 7), (6, 7, 2, 1));
    }

    #[test]
    fn gap_larger_than_block_draws_nothing() {
        let layout = BlockLayout::square(1, 3);
        assert_eq!(layout.block_rect(1, 1), (1, 1, 0, 0));
    }
}
