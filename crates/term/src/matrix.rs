//! LedMatrix: the in-memory pixel grid the engine paints through
//! [`DisplaySink`].
//!
//! It stands in for the physical LED matrix: it only ever learns about a cell
//! when the engine reports that cell as changed, and the view reads it back
//! when drawing a frame.

use crate::core::DisplaySink;
use crate::types::{VisualState, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedMatrix {
    /// Indexed `[y][x]`
    pixels: [[VisualState; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// Incremented on every write; lets the frame gate spot changes.
    revision: u64,
}

impl LedMatrix {
    pub fn new() -> Self {
        Self {
            pixels: [[VisualState::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            revision: 0,
        }
    }

    pub fn pixel(&self, x: u8, y: u8) -> VisualState {
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or_default()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn clear(&mut self) {
        for row in &mut self.pixels {
            row.fill(VisualState::Empty);
        }
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for LedMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for LedMatrix {
    fn set_cell_color(&mut self, x: u8, y: u8, visual: VisualState) {
        if let Some(px) = self
            .pixels
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *px = visual;
            self.revision = self.revision.wrapping_add(1);
        }
    }
}
