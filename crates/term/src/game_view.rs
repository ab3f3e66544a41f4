//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, Rect};

const BACKGROUND: Rgb = Rgb::new(18, 18, 18);
const STATUS_BAR: Rgb = Rgb::new(30, 30, 30);
const PLAYER: Rgb = Rgb::new(80, 200, 120);
const OBSTACLE: Rgb = Rgb::new(230, 70, 70);
const TEXT: Rgb = Rgb::new(240, 240, 240);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const TINT: Rgb = Rgb::new(0, 0, 0);

const PAUSE_TINT_ALPHA: u8 = 140;
const GAME_OVER_TINT_ALPHA: u8 = 160;

/// Height of the status bar in logical pixels
const STATUS_BAR_PX: i32 = 40;
/// Left/right inset of status bar text in logical pixels
const STATUS_INSET_PX: i32 = 10;

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

/// Visible cell span of a rectangle, relative to the field's top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellSpan {
    col: u16,
    row: u16,
    cols: u16,
    rows: u16,
}

/// A lightweight terminal renderer for the dodge game.
pub struct GameView {
    /// Logical pixels per terminal column.
    px_per_col: i32,
    /// Logical pixels per terminal row.
    px_per_row: i32,
}

impl Default for GameView {
    fn default() -> Self {
        // 1:2 helps compensate for typical terminal glyph aspect ratio.
        Self {
            px_per_col: 10,
            px_per_row: 20,
        }
    }
}

impl GameView {
    pub fn new(px_per_col: i32, px_per_row: i32) -> Self {
        Self {
            px_per_col: px_per_col.max(1),
            px_per_row: px_per_row.max(1),
        }
    }

    /// Field size in cells, excluding the border.
    pub fn field_cells(&self, field: Rect) -> (u16, u16) {
        let cols = ceil_div(field.w, self.px_per_col).clamp(0, u16::MAX as i32 - 2);
        let rows = ceil_div(field.h, self.px_per_row).clamp(0, u16::MAX as i32 - 2);
        (cols as u16, rows as u16)
    }

    /// Field size in cells, including the border.
    pub fn frame_size(&self, field: Rect) -> (u16, u16) {
        let (cols, rows) = self.field_cells(field);
        (cols + 2, rows + 2)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(TEXT, Rgb::new(0, 0, 0)).into_cell(' '));

        let (cols, rows) = self.field_cells(snap.field);
        let (frame_w, frame_h) = (cols + 2, rows + 2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let origin = (start_x + 1, start_y + 1);

        fb.fill_rect(
            origin.0,
            origin.1,
            cols,
            rows,
            ' ',
            CellStyle::plain(TEXT, BACKGROUND),
        );
        self.draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::plain(BORDER, Rgb::new(0, 0, 0)),
        );

        self.draw_status_bar(fb, snap, origin, cols);

        self.draw_rounded_rect(fb, snap, origin, snap.player, PLAYER);
        for rect in &snap.obstacles {
            self.draw_rounded_rect(fb, snap, origin, *rect, OBSTACLE);
        }

        match snap.phase {
            Phase::Running => {}
            Phase::Paused => {
                fb.tint_rect(origin.0, origin.1, cols, rows, TINT, PAUSE_TINT_ALPHA);
                let mid = snap.field.h / 2;
                let title = self.row_at(snap, mid - 20);
                let hint = self.row_at(snap, mid + 20);
                self.draw_centered(fb, origin, cols, title, "PAUSED", 0, true);
                self.draw_centered(fb, origin, cols, hint, "Press P to resume", 0, false);
            }
            Phase::GameOver => {
                fb.tint_rect(origin.0, origin.1, cols, rows, TINT, GAME_OVER_TINT_ALPHA);
                let mid = snap.field.h / 2;
                let title = self.row_at(snap, mid - 40);
                let score = self.row_at(snap, mid);
                let hint = self.row_at(snap, mid + 40);
                self.draw_centered(fb, origin, cols, title, "GAME OVER", 0, true);
                let text_w = "Score: ".len() as u16 + digit_count(snap.score);
                let x = self.draw_centered(fb, origin, cols, score, "Score: ", text_w, false);
                let style = self.text_style_at(fb, x, origin.1 + score, false);
                fb.put_u32(x, origin.1 + score, snap.score, style);
                self.draw_centered(fb, origin, cols, hint, "R = Restart  |  Esc = Quit", 0, false);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_status_bar(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: (u16, u16), cols: u16) {
        let bar_rows = ceil_div(STATUS_BAR_PX, self.px_per_row).max(1) as u16;
        fb.fill_rect(origin.0, origin.1, cols, bar_rows, ' ', CellStyle::plain(TEXT, STATUS_BAR));

        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(TEXT, STATUS_BAR)
        };
        let inset = (STATUS_INSET_PX / self.px_per_col).max(0) as u16;

        let x = origin.0 + inset;
        fb.put_str(x, origin.1, "Score: ", style);
        fb.put_u32(x + 7, origin.1, snap.score, style);

        let best_w = "Best: ".len() as u16 + digit_count(snap.highscore);
        let right = origin.0 + cols.saturating_sub(inset);
        let x = right.saturating_sub(best_w).max(origin.0);
        fb.put_str(x, origin.1, "Best: ", style);
        fb.put_u32(x + 6, origin.1, snap.highscore, style);
    }

    /// Filled rectangle with quarter-block corners when at least 2x2 cells are visible.
    fn draw_rounded_rect(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        origin: (u16, u16),
        rect: Rect,
        color: Rgb,
    ) {
        let Some(span) = self.cell_span(snap.field, rect) else {
            return;
        };

        let x0 = origin.0 + span.col;
        let y0 = origin.1 + span.row;
        let x1 = x0 + span.cols - 1;
        let y1 = y0 + span.rows - 1;
        let rounded = span.cols >= 2 && span.rows >= 2;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let ch = match (rounded, x == x0, x == x1, y == y0, y == y1) {
                    (true, true, _, true, _) => '▗',
                    (true, _, true, true, _) => '▖',
                    (true, true, _, _, true) => '▝',
                    (true, _, true, _, true) => '▘',
                    _ => '█',
                };
                let bg = fb.get(x, y).map(|c| c.style.bg).unwrap_or(BACKGROUND);
                fb.put_char(x, y, ch, CellStyle::plain(color, bg));
            }
        }
    }

    /// Map a logical rect to the cells it touches, clipped to the field.
    fn cell_span(&self, field: Rect, rect: Rect) -> Option<CellSpan> {
        let (cols, rows) = self.field_cells(field);
        let c0 = (rect.x - field.x).div_euclid(self.px_per_col).max(0);
        let c1 = ceil_div(rect.right() - field.x, self.px_per_col).min(cols as i32);
        let r0 = (rect.y - field.y).div_euclid(self.px_per_row).max(0);
        let r1 = ceil_div(rect.bottom() - field.y, self.px_per_row).min(rows as i32);
        if c1 <= c0 || r1 <= r0 {
            return None;
        }
        Some(CellSpan {
            col: c0 as u16,
            row: r0 as u16,
            cols: (c1 - c0) as u16,
            rows: (r1 - r0) as u16,
        })
    }

    fn row_at(&self, snap: &GameSnapshot, y_px: i32) -> u16 {
        (y_px - snap.field.y).div_euclid(self.px_per_row).max(0) as u16
    }

    /// Keep the cell's (possibly tinted) background so text sits on the overlay.
    fn text_style_at(&self, fb: &FrameBuffer, x: u16, y: u16, bold: bool) -> CellStyle {
        let bg = fb.get(x, y).map(|c| c.style.bg).unwrap_or(BACKGROUND);
        CellStyle {
            bold,
            ..CellStyle::plain(TEXT, bg)
        }
    }

    /// Draw `text` centered in the field on `row`. `total_w` overrides the
    /// width used for centering when more text follows. Returns the column
    /// after the drawn text.
    fn draw_centered(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        cols: u16,
        row: u16,
        text: &str,
        total_w: u16,
        bold: bool,
    ) -> u16 {
        let text_w = text.chars().count() as u16;
        let w = total_w.max(text_w);
        let mut x = origin.0 + cols.saturating_sub(w) / 2;
        let y = origin.1 + row;
        for ch in text.chars() {
            let style = self.text_style_at(fb, x, y, bold);
            fb.put_char(x, y, ch, style);
            x += 1;
        }
        x
    }
}

fn ceil_div(a: i32, b: i32) -> i32 {
    -((-a).div_euclid(b))
}
