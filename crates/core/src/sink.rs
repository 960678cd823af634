//! Collaborator contracts and the reports handed to them.
//!
//! The engine never pushes pixels or text itself. Every session call returns
//! a [`Report`] listing the cells that changed and the status notifications
//! raised; the caller forwards it with [`Report::present`].

use arrayvec::ArrayVec;

use crate::types::{MoveOutcome, Player, Redraw, StatusEvent, VisualState, BOARD_CELLS};

/// Receives per-cell colour updates (an LED matrix, a terminal grid, a test double).
pub trait DisplaySink {
    fn set_cell_color(&mut self, x: u8, y: u8, visual: VisualState);
}

/// Receives discrete status notifications and decides how to word them.
pub trait StatusSink {
    fn notify(&mut self, event: StatusEvent);
}

/// Changed cells, at most one entry per cell
pub type Redraws = ArrayVec<Redraw, BOARD_CELLS>;

/// Status notifications raised by one call
pub type StatusEvents = ArrayVec<StatusEvent, 4>;

/// Everything observable that one session call produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Set for select actions only
    pub outcome: Option<MoveOutcome>,
    pub redraws: Redraws,
    pub events: StatusEvents,
    /// Set when this call completed a winning pattern
    pub game_over: Option<Player>,
}

impl Report {
    pub fn rejected(outcome: MoveOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.redraws.is_empty() && self.events.is_empty()
    }

    /// Record a repaint, replacing any earlier entry for the same cell.
    pub fn redraw(&mut self, redraw: Redraw) {
        if let Some(existing) = self.redraws.iter_mut().find(|r| r.pos == redraw.pos) {
            *existing = redraw;
        } else {
            self.redraws.push(redraw);
        }
    }

    pub fn event(&mut self, event: StatusEvent) {
        self.events.push(event);
    }

    /// Forward the redraws and notifications to the collaborators.
    pub fn present<D, S>(&self, display: &mut D, status: &mut S)
    where
        D: DisplaySink + ?Sized,
        S: StatusSink + ?Sized,
    {
        for r in &self.redraws {
            display.set_cell_color(r.pos.x, r.pos.y, r.visual);
        }
        for &event in &self.events {
            status.notify(event);
        }
    }
}
