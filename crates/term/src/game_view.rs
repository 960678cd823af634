//! GameView: maps the LED matrix, the status panel and a session snapshot
//! into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::matrix::LedMatrix;
use crate::status::{describe, StatusPanel};
use crate::types::{StatusEvent, VisualState, BOARD_HEIGHT, BOARD_WIDTH, MAX_PIECES};

/// Splash bitmap for "TEEKO", one byte per column.
///
/// Bits 7..1 are pixel rows (bit 7 is the top row); bit 0 selects the colour
/// (set = red, clear = green).
const SPLASH_COLUMNS: [u8; 16] = [
    65, 125, 65, 124, 84, 84, 125, 85, 85, 124, 16, 108, 57, 69, 69, 57,
];

const BG: Rgb = Rgb::new(20, 20, 28);
const GREEN: Rgb = Rgb::new(90, 220, 110);
const RED: Rgb = Rgb::new(230, 80, 80);
const CURSOR: Rgb = Rgb::new(240, 220, 80);
const PICK_CURSOR: Rgb = Rgb::new(255, 150, 40);

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

/// Everything one frame is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub matrix: &'a LedMatrix,
    pub status: &'a StatusPanel,
    pub snapshot: &'a GameSnapshot,
}

/// Terminal renderer for the Teeko board and side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered board, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Top-left corner of the bordered board inside `viewport`.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w + PANEL_WIDTH) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render a game frame into an existing framebuffer.
    pub fn render_into(&self, scene: &Scene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::plain(BG, BG),
        );
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::plain(Rgb::new(200, 200, 200), Rgb::BLACK),
        );

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let (ch, style) = pixel_style(scene.matrix.pixel(x, y));
                let (px, py) = self.cell_origin(start_x, start_y, x, y);
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(fb, scene, viewport, start_x + frame_w + 2, start_y);

        let snap = scene.snapshot;
        if let Some(winner) = snap.winner {
            let lines = [
                "GAME OVER".to_string(),
                describe(StatusEvent::GameOver(winner)),
                "Press a key".to_string(),
            ];
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, &lines);
        } else if snap.paused {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["PAUSED".to_string()]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    /// Render the start screen: the TEEKO banner and a prompt.
    pub fn render_splash_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let banner_w = SPLASH_COLUMNS.len() as u16 * self.cell_w;
        let banner_h = 7;
        let x0 = viewport.width.saturating_sub(banner_w) / 2;
        let y0 = viewport.height.saturating_sub(banner_h + 3) / 2;

        for (col, &bits) in SPLASH_COLUMNS.iter().enumerate() {
            let colour = if bits & 0x01 != 0 { RED } else { GREEN };
            for row in (1..=7u8).rev() {
                if bits & (1 << row) == 0 {
                    continue;
                }
                let px = x0 + col as u16 * self.cell_w;
                let py = y0 + (7 - row) as u16;
                fb.fill_rect(px, py, self.cell_w, 1, '█', CellStyle::plain(colour, Rgb::BLACK));
            }
        }

        let prompt = CellStyle::default().bold();
        fb.put_centered(0, viewport.width, y0 + banner_h + 2, "Press any key to start", prompt);
    }

    pub fn render_splash(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_splash_into(viewport, &mut fb);
        fb
    }

    /// Terminal position of board cell `(x, y)`; row 0 is drawn at the bottom.
    fn cell_origin(&self, start_x: u16, start_y: u16, x: u8, y: u8) -> (u16, u16) {
        let row_from_top = (BOARD_HEIGHT - 1 - y) as u16;
        (
            start_x + 1 + x as u16 * self.cell_w,
            start_y + 1 + row_from_top * self.cell_h,
        )
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        scene: &Scene<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::BLACK);
        let snap = scene.snapshot;

        let mut y = start_y;
        fb.put_str(panel_x, y, "TEEKO", label);
        y += 2;

        fb.put_str(panel_x, y, &scene.status.player_line(), value);
        y += 1;
        fb.put_str(panel_x, y, &scene.status.phase_line(), value);
        y += 2;

        fb.put_str(panel_x, y, "PIECES", label);
        y += 1;
        let pieces = format!(
            "1: {}/{}  2: {}/{}",
            snap.pieces[0], MAX_PIECES, snap.pieces[1], MAX_PIECES
        );
        fb.put_str(panel_x, y, &pieces, value);
        y += 2;

        fb.put_str(panel_x, y, "MOVE", label);
        let (lamp, colour) = if snap.valid_target {
            ("VALID", GREEN)
        } else {
            ("INVALID", RED)
        };
        fb.put_str(panel_x + 5, y, lamp, CellStyle::plain(colour, Rgb::BLACK).bold());
        y += 2;

        let dim = value.dim();
        for line in scene.status.history() {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y += 1;
        }
    }
}

/// Width reserved to the right of the board for the side panel.
const PANEL_WIDTH: u16 = 28;

fn pixel_style(visual: VisualState) -> (char, CellStyle) {
    match visual {
        VisualState::Empty => ('·', CellStyle::plain(Rgb::new(90, 90, 100), BG).dim()),
        VisualState::PlayerA => ('█', CellStyle::plain(GREEN, BG).bold()),
        VisualState::PlayerB => ('█', CellStyle::plain(RED, BG).bold()),
        VisualState::Cursor => ('▓', CellStyle::plain(CURSOR, BG).bold()),
        VisualState::PickUpCursor => ('▒', CellStyle::plain(PICK_CURSOR, BG).bold()),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, lines: &[String]) {
    let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::BLACK).bold();
    let top = (y + h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        fb.put_centered(x, w, top + i as u16, line, style);
    }
}
