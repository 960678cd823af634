//! Cursor module - the flashing selection marker
//!
//! The cursor never leaves the board: every move wraps around the edges.
//! Each mutation reports the cells the display has to repaint instead of
//! touching the display itself.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{CursorGlyph, Position, Redraw, VisualState, BOARD_HEIGHT, BOARD_WIDTH};

/// Cells touched by a single cursor update (old and new position at most)
pub type CursorRedraws = ArrayVec<Redraw, 2>;

/// Wrap `value` into `[0, modulus)`.
///
/// `%` keeps the sign of the dividend, so a negative value needs the second
/// pass to land back in range.
#[inline]
pub fn normalize(value: i16, modulus: i16) -> i16 {
    ((value % modulus) + modulus) % modulus
}

/// Selection cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    x: i8,
    y: i8,
    visible: bool,
    glyph: CursorGlyph,
}

impl Cursor {
    /// A hidden cursor in the middle of the board
    pub fn new() -> Self {
        Self::at(Position::new(BOARD_WIDTH / 2, BOARD_HEIGHT / 2))
    }

    pub fn at(pos: Position) -> Self {
        Self {
            x: pos.x as i8,
            y: pos.y as i8,
            visible: false,
            glyph: CursorGlyph::Select,
        }
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn position(&self) -> Position {
        Position::new(self.x as u8, self.y as u8)
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn glyph(&self) -> CursorGlyph {
        self.glyph
    }

    pub fn set_glyph(&mut self, glyph: CursorGlyph) {
        self.glyph = glyph;
    }

    /// What the cursor cell shows right now
    pub fn visual(&self, board: &Board) -> VisualState {
        if self.visible {
            self.glyph.visual()
        } else {
            board.at(self.position()).into()
        }
    }

    /// Mark the cursor as not drawn, e.g. after its cell was repainted with a piece.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Move by `(dx, dy)`, wrapping at the edges.
    ///
    /// The cursor becomes visible at its new cell. The returned redraws
    /// restore the old cell to the board content and paint the glyph on the
    /// new one; a move that lands on the same cell reports only that cell.
    pub fn move_by(&mut self, dx: i8, dy: i8, board: &Board) -> CursorRedraws {
        let mut redraws = CursorRedraws::new();
        let old = self.position();

        self.x = normalize(self.x as i16 + dx as i16, BOARD_WIDTH as i16) as i8;
        self.y = normalize(self.y as i16 + dy as i16, BOARD_HEIGHT as i16) as i8;
        self.visible = true;

        let new = self.position();
        if old != new {
            redraws.push(Redraw::new(old, board.at(old).into()));
        }
        redraws.push(Redraw::new(new, self.glyph.visual()));
        redraws
    }

    /// Flip visibility in place and report the repaint for the cursor cell.
    pub fn tick_blink(&mut self, board: &Board) -> Redraw {
        self.visible = !self.visible;
        Redraw::new(self.position(), self.visual(board))
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
