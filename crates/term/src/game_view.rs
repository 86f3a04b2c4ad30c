//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';
const EMPTY_DOT: char = '·';

/// Widest board cell the driver accepts, in terminal columns
pub const MAX_CELL_WIDTH: u16 = 8;

const CONTROLS: [(&str, &str); 5] = [
    ("←/h/a", "left"),
    ("→/l/d", "right"),
    ("↓/j/s", "down"),
    ("↑/k/w", "rotate"),
    ("q/Esc", "quit"),
];
const KEY_COLUMN: u16 = 7;

/// A lightweight terminal renderer for the playfield.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered playfield in terminal cells, saturating at `u16::MAX`
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            (snap.width as u16).saturating_mul(self.cell_w).saturating_add(2),
            (snap.height as u16).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        fb.fill_rect(
            start_x.saturating_add(1),
            start_y.saturating_add(1),
            frame_w - 2,
            frame_h - 2,
            ' ',
            bg,
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells and the falling piece; rows above the top edge are not drawn.
        for y in 0..snap.height as i16 {
            for x in 0..snap.width as i16 {
                match snap.visible_cell(x, y) {
                    Some(color) => self.draw_block(fb, start_x, start_y, x, y, color),
                    None => self.draw_empty(fb, start_x, start_y, x, y),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x.saturating_add(frame_w), start_y);

        if snap.game_over {
            draw_banner(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal coordinate of board cell (x, y), saturating off-screen
    fn cell_origin(&self, start_x: u16, start_y: u16, x: i16, y: i16) -> (u16, u16) {
        (
            start_x
                .saturating_add(1)
                .saturating_add((x as u16).saturating_mul(self.cell_w)),
            start_y
                .saturating_add(1)
                .saturating_add((y as u16).saturating_mul(self.cell_h)),
        )
    }

    fn draw_block(&self, fb: &mut FrameBuffer, sx: u16, sy: u16, x: i16, y: i16, color: Color) {
        let (px, py) = self.cell_origin(sx, sy, x, y);
        let style = CellStyle::new(Rgb::from(color), PLAYFIELD_BG).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, sx: u16, sy: u16, x: i16, y: i16) {
        let (px, py) = self.cell_origin(sx, sy, x, y);
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, EMPTY_DOT, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < KEY_COLUMN + 7 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        let key = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "CONTROLS", label);
        y = y.saturating_add(1);
        for (keys, what) in CONTROLS {
            fb.put_str(panel_x, y, keys, key);
            fb.put_str(panel_x + KEY_COLUMN, y, what, value);
            y = y.saturating_add(1);
        }

        if snap.game_over {
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, "r", key);
            fb.put_str(panel_x + KEY_COLUMN, y, "restart", value);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x.saturating_add(dx), y, '─', style);
        fb.put_char(x.saturating_add(dx), bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y.saturating_add(dy), '│', style);
        fb.put_char(right, y.saturating_add(dy), '│', style);
    }
}

/// Centered banner across the playfield, padded by one blank on each side
fn draw_banner(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
    let mid_y = y.saturating_add(h / 2);
    let padded_w = text.chars().count() as u16 + 2;
    let pad_x = x.saturating_add(w.saturating_sub(padded_w) / 2);
    fb.fill_rect(pad_x, mid_y, padded_w, 1, ' ', style);
    fb.put_str_centered(x, w, mid_y, text, style);
}
