//! FrameGate: decides when the main loop should redraw.
//!
//! The loop wakes every tick, but most ticks change nothing. A frame is drawn
//! when the combined revision of the display and status collaborators moves,
//! and otherwise at most once per refresh interval so a resized or scribbled
//! terminal heals on its own.

#[derive(Debug, Clone)]
pub struct FrameGate {
    refresh_ms: u64,
    last_draw_ms: u64,
    last_revision: Option<u64>,
}

impl FrameGate {
    pub fn new(refresh_ms: u64) -> Self {
        Self {
            refresh_ms,
            last_draw_ms: 0,
            last_revision: None,
        }
    }

    /// Forget the last frame; the next call draws unconditionally.
    pub fn reset(&mut self) {
        self.last_revision = None;
    }

    pub fn should_draw(&mut self, now_ms: u64, revision: u64) -> bool {
        let changed = self.last_revision != Some(revision);
        let stale = now_ms.saturating_sub(self.last_draw_ms) >= self.refresh_ms;
        if changed || stale {
            self.last_draw_ms = now_ms;
            self.last_revision = Some(revision);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_on_first_call_and_on_change() {
        let mut gate = FrameGate::new(1_000);
        assert!(gate.should_draw(0, 7));
        assert!(!gate.should_draw(10, 7));
        assert!(gate.should_draw(20, 8));
    }

    #[test]
    fn refreshes_when_idle() {
        let mut gate = FrameGate::new(250);
        assert!(gate.should_draw(0, 1));
        assert!(!gate.should_draw(249, 1));
        assert!(gate.should_draw(250, 1));
        assert!(!gate.should_draw(260, 1));
    }

    #[test]
    fn reset_forces_a_draw() {
        let mut gate = FrameGate::new(1_000);
        gate.should_draw(0, 1);
        gate.reset();
        assert!(gate.should_draw(1, 1));
    }
}
