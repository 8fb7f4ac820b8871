//! ScorecardView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (standard frames 5 columns wide, the final frame and the total 7):
//!
//! ```text
//! ┌─────┬─────┬ ─ ─ ┬───────┬───────┐
//! │  1  │  2  │     │  10   │ TOTAL │
//! ├─────┼─────┼ ─ ─ ┼───────┼───────┤
//! │   X │ 7 / │     │ X 8 1 │       │
//! │  20 │  39 │     │   167 │   167 │
//! └─────┴─────┴ ─ ─ ┴───────┴───────┘
//! ```

use crate::core::{FrameSnapshot, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::FRAME_COUNT;

/// Inner width of frames 1-9.
const STANDARD_BOX_W: u16 = 5;
/// Inner width of the tenth frame and the total box.
const WIDE_BOX_W: u16 = 7;
/// Scorecard rows: border, header, separator, marks, totals, border.
const CARD_H: u16 = 6;
/// Rows below the card: banner and status line.
const FOOTER_H: u16 = 3;

const HINT: &str = "0-9 pins  x strike  / spare  - gutter  r restart  q quit";
const GAME_OVER_HINT: &str = "r new game  q quit";

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

/// Renders a ten-frame scorecard.
#[derive(Debug, Clone)]
pub struct ScorecardView {
    anchor_y: AnchorY,
}

impl Default for ScorecardView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl ScorecardView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Total scorecard width including borders.
    pub fn card_width() -> u16 {
        let standard = u16::from(FRAME_COUNT - 1) * (STANDARD_BOX_W + 1);
        standard + 2 * (WIDE_BOX_W + 1) + 1
    }

    /// Left border column of each box, plus the closing border.
    fn columns() -> [u16; FRAME_COUNT as usize + 2] {
        let mut cols = [0u16; FRAME_COUNT as usize + 2];
        for i in 1..cols.len() {
            let inner = if i < FRAME_COUNT as usize {
                STANDARD_BOX_W
            } else {
                WIDE_BOX_W
            };
            cols[i] = cols[i - 1] + inner + 1;
        }
        cols
    }

    /// Render the scorecard into an existing framebuffer.
    ///
    /// `status` replaces the key hint under the card (used for roll errors).
    /// Once the game is no longer playable the card gets a banner and the
    /// hint shrinks to the keys that still do something.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let card_w = Self::card_width();
        let start_x = viewport.width.saturating_sub(card_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(CARD_H + FOOTER_H) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::fg(Rgb::new(160, 160, 170));
        self.draw_grid(fb, start_x, start_y, border);

        let cols = Self::columns();
        for number in 1..=FRAME_COUNT {
            let i = usize::from(number - 1);
            let x = start_x + cols[i];
            let w = cols[i + 1] - cols[i] - 1;
            let frame = snap.frame(number);
            self.draw_frame(fb, x, start_y, w, number, frame, snap.current_frame == number);
        }

        // Total box.
        let x = start_x + cols[FRAME_COUNT as usize];
        let label = CellStyle::fg(Rgb::new(230, 230, 230)).bold();
        fb.put_str_centered(x + 1, WIDE_BOX_W, start_y + 1, "TOTAL", label);
        let total = if snap.game_over {
            Some(snap.final_score)
        } else {
            snap.latest_total()
        };
        if let Some(total) = total {
            let style = if snap.game_over {
                label
            } else {
                CellStyle::default().dim()
            };
            fb.put_str_right(x + WIDE_BOX_W - 1, start_y + 4, &total.to_string(), style);
        }

        // Footer.
        let footer_y = start_y + CARD_H;
        if !snap.playable() {
            let banner = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
            fb.put_str_centered(start_x, card_w, footer_y, "GAME OVER", banner);
        }
        match status {
            Some(msg) => {
                let style = CellStyle::fg(Rgb::new(230, 110, 100));
                fb.put_str(start_x, footer_y + 2, msg, style);
            }
            None => {
                let style = CellStyle::fg(Rgb::new(140, 140, 150)).dim();
                let hint = if snap.playable() { HINT } else { GAME_OVER_HINT };
                fb.put_str(start_x, footer_y + 2, hint, style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, status: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        let cols = Self::columns();
        let last = cols.len() - 1;
        let rows: [(u16, [char; 3], char); 3] = [
            (0, ['┌', '┬', '┐'], '─'),
            (2, ['├', '┼', '┤'], '─'),
            (CARD_H - 1, ['└', '┴', '┘'], '─'),
        ];

        for (dy, joints, fill) in rows {
            fb.hline(x, y + dy, cols[last] + 1, fill, style);
            for (i, &col) in cols.iter().enumerate() {
                let joint = match i {
                    0 => joints[0],
                    i if i == last => joints[2],
                    _ => joints[1],
                };
                fb.put_char(x + col, y + dy, joint, style);
            }
        }

        for dy in [1, 3, 4] {
            for &col in &cols {
                fb.put_char(x + col, y + dy, '│', style);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_frame(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        number: u8,
        frame: Option<&FrameSnapshot>,
        current: bool,
    ) {
        let header = if current {
            CellStyle::fg(Rgb::new(240, 200, 80)).bold()
        } else {
            CellStyle::fg(Rgb::new(200, 200, 200))
        };
        let digits = crate::fb::decimal_width(u32::from(number));
        fb.put_u32(x + 1 + (w - digits) / 2, y + 1, u32::from(number), header);

        let Some(frame) = frame else {
            return;
        };

        for (slot, &mark) in (0u16..).zip(&frame.marks) {
            fb.put_char(x + 2 + 2 * slot, y + 3, mark, mark_style(mark));
        }

        if let Some(total) = frame.running_total {
            let value = CellStyle::fg(Rgb::new(220, 220, 220));
            let width = crate::fb::decimal_width(u32::from(total));
            fb.put_u32(x + w - width, y + 4, u32::from(total), value);
        }
    }
}

fn mark_style(mark: char) -> CellStyle {
    match mark {
        'X' => CellStyle::fg(Rgb::new(240, 90, 90)).bold(),
        '/' => CellStyle::fg(Rgb::new(90, 170, 240)).bold(),
        '_' => CellStyle::fg(Rgb::new(120, 120, 130)).dim(),
        _ => CellStyle::fg(Rgb::new(220, 220, 220)),
    }
}
