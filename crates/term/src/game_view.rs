//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{SessionSnapshot, Token};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{JewelColor, TokenState, HIDDEN_ROWS};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

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

/// Draws the visible rows of the field inside a border, with a side panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

/// Frame origin and outer size in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Outer size of the bordered field for a snapshot, border included.
    pub fn frame_size(&self, snap: &SessionSnapshot) -> (u16, u16) {
        let w = (snap.columns as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.rows as u16).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can keep one framebuffer across frames.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (w, h) = self.frame_size(snap);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            w.saturating_sub(2),
            h.saturating_sub(2),
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG),
        );
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK));

        for (y, row) in snap.visible_rows().enumerate() {
            for (x, &token) in row.iter().enumerate() {
                self.draw_token(fb, frame, x as u16, y as u16, token);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_token(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, token: Token) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y;

        let Some(color) = token.color() else {
            let dot = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
            fb.fill_rect(px, py, self.cell_w, 1, '·', dot);
            return;
        };

        let fg = jewel_rgb(color);
        match token.state() {
            TokenState::Frozen => {
                fb.fill_rect(px, py, self.cell_w, 1, '█', CellStyle::new(fg, PLAY_BG));
            }
            TokenState::Falling => {
                fb.fill_rect(px, py, self.cell_w, 1, '█', CellStyle::new(fg, PLAY_BG).bold());
            }
            TokenState::Landed => {
                let style = CellStyle::new(fg, PLAY_BG).bold();
                fb.fill_rect(px, py, self.cell_w, 1, '█', style);
                fb.put_char(px, py, '[', style);
                if self.cell_w > 1 {
                    fb.put_char(px + self.cell_w - 1, py, ']', style);
                }
            }
            TokenState::Matched => {
                let style = CellStyle::new(fg, Rgb::WHITE).bold();
                fb.fill_rect(px, py, self.cell_w, 1, '*', style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        let hint = value.dim();

        let state = if snap.game_over {
            "over"
        } else {
            snap.faller.map_or("-", |f| f.state.as_str())
        };
        let speed = if snap.soft_drop { "fast" } else { "normal" };

        let mut y = frame.y;
        for (name, text) in [("STATE", state), ("SPEED", speed)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), text, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "JEWELS", label);
        let hidden = HIDDEN_ROWS * snap.columns;
        let count = snap.cells.iter().skip(hidden).filter(|t| !t.is_empty()).count();
        fb.put_str(panel_x, y.saturating_add(1), &count.to_string(), value);
        y = y.saturating_add(3);

        for line in ["←→ move", "↑ rotate", "↓ drop", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let y = frame.y.saturating_add(frame.h / 2);
    fb.put_str(x, y, text, CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold());
}

pub fn jewel_rgb(color: JewelColor) -> Rgb {
    match color {
        JewelColor::Red => Rgb::new(220, 60, 60),
        JewelColor::Orange => Rgb::new(255, 150, 40),
        JewelColor::Yellow => Rgb::new(240, 220, 80),
        JewelColor::Green => Rgb::new(90, 210, 110),
        JewelColor::Blue => Rgb::new(70, 120, 230),
        JewelColor::Purple => Rgb::new(160, 90, 210),
        JewelColor::Pink => Rgb::new(250, 130, 190),
    }
}
