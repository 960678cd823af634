//! Game session - the top-level façade over board, cursor, phase engine and
//! win detection.
//!
//! All mutation goes through the methods here. Each call returns a [`Report`]
//! describing what changed; nothing is drawn or printed from inside the
//! session, which keeps it deterministic and easy to drive from tests.
//!
//! Time only advances through [`GameSession::tick`], with the elapsed
//! milliseconds supplied by the caller.

use tracing::{debug, info};

use crate::board::Board;
use crate::cursor::Cursor;
use crate::phase::{PhaseEngine, TurnState};
use crate::sink::Report;
use crate::snapshot::GameSnapshot;
use crate::types::{
    GameAction, MoveOutcome, Phase, Player, Reason, Redraw, StatusEvent, BLINK_INTERVAL_MS,
};
use crate::win::WinDetector;

/// Session tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Cursor flash period
    pub blink_interval_ms: u32,
    /// Who moves first in each new game
    pub first_player: Player,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            blink_interval_ms: BLINK_INTERVAL_MS,
            first_player: Player::A,
        }
    }
}

/// One game of Teeko, plus pause and blink bookkeeping
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    cursor: Cursor,
    engine: PhaseEngine,
    blink_elapsed_ms: u32,
    paused: bool,
    winner: Option<Player>,
    /// Monotonic game counter (increments on every new game).
    game_id: u32,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            board: Board::new(),
            cursor: Cursor::new(),
            engine: PhaseEngine::new(config.first_player),
            blink_elapsed_ms: 0,
            paused: false,
            winner: None,
            game_id: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn turn(&self) -> &TurnState {
        self.engine.turn()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn active_player(&self) -> Player {
        self.engine.active_player()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Would a select at the cursor be accepted right now?
    pub fn valid_target(&self) -> bool {
        !self.is_over()
            && self
                .engine
                .validate_move(self.engine.phase(), &self.board, self.cursor.position())
    }

    /// Reset to an empty board and report a full repaint.
    pub fn new_game(&mut self) -> Report {
        let game_id = self.game_id.wrapping_add(1);
        *self = Self::new(self.config);
        self.game_id = game_id;

        let mut report = Report::default();
        for (pos, cell) in self.board.iter() {
            report.redraw(Redraw::new(pos, cell.into()));
        }
        report.event(StatusEvent::NewGame);
        report.event(StatusEvent::PhaseChanged(self.engine.phase()));
        report.event(StatusEvent::ActivePlayerChanged(self.engine.active_player()));

        info!(game_id, first_player = %self.config.first_player, "new game");
        report
    }

    /// Dispatch a discrete input event.
    pub fn apply_action(&mut self, action: GameAction) -> Report {
        if let Some((dx, dy)) = action.direction() {
            return self.apply_directional(dx, dy);
        }
        match action {
            GameAction::Select => self.apply_select(),
            GameAction::Cancel => self.cancel_pick_up(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.new_game(),
            GameAction::MoveLeft
            | GameAction::MoveRight
            | GameAction::MoveUp
            | GameAction::MoveDown => Report::default(),
        }
    }

    /// Move the cursor and restart the flash cycle.
    pub fn apply_directional(&mut self, dx: i8, dy: i8) -> Report {
        let mut report = Report::default();
        if self.paused || self.is_over() {
            return report;
        }

        for r in self.cursor.move_by(dx, dy, &self.board) {
            report.redraw(r);
        }
        self.blink_elapsed_ms = 0;
        report
    }

    /// Drop, pick up or put down at the cursor depending on the phase.
    pub fn apply_select(&mut self) -> Report {
        if self.is_over() {
            return Report::rejected(MoveOutcome::Rejected(Reason::GameOver));
        }
        if self.paused {
            return Report::rejected(MoveOutcome::Rejected(Reason::Paused));
        }

        let phase_before = self.engine.phase();
        let player_before = self.engine.active_player();

        let step = match self.engine.apply(&mut self.board, &mut self.cursor) {
            Ok(step) => step,
            Err(reason) => return Report::rejected(MoveOutcome::Rejected(reason)),
        };

        let mut report = Report {
            outcome: Some(MoveOutcome::Applied),
            ..Report::default()
        };

        // The changed cell is under the cursor; show the piece and let the
        // next blink bring the cursor back.
        let pos = step.position();
        self.cursor.hide();
        report.redraw(Redraw::new(pos, self.board.at(pos).into()));

        if self.engine.phase() != phase_before {
            report.event(StatusEvent::PhaseChanged(self.engine.phase()));
        }
        if self.engine.active_player() != player_before {
            report.event(StatusEvent::ActivePlayerChanged(self.engine.active_player()));
        }

        if let Some(player) = step.rested() {
            if WinDetector::evaluate(&self.board, player) {
                self.winner = Some(player);
                report.game_over = Some(player);
                report.event(StatusEvent::GameOver(player));
                info!(game_id = self.game_id, winner = %player, "game over");
            }
        }

        report
    }

    /// Return a lifted piece to its origin; the same player picks again.
    pub fn cancel_pick_up(&mut self) -> Report {
        let mut report = Report::default();
        if self.paused || self.is_over() {
            return report;
        }

        let Some(origin) = self.engine.cancel_pick_up(&mut self.board, &mut self.cursor) else {
            return report;
        };

        if self.cursor.position() == origin {
            self.cursor.hide();
        } else if self.cursor.visible() {
            // Glyph switched back to the select cursor.
            report.redraw(Redraw::new(self.cursor.position(), self.cursor.visual(&self.board)));
        }
        report.redraw(Redraw::new(origin, self.board.at(origin).into()));
        report.event(StatusEvent::PhaseChanged(self.engine.phase()));
        report
    }

    pub fn toggle_pause(&mut self) -> Report {
        let mut report = Report::default();
        if self.is_over() {
            return report;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        report.event(StatusEvent::Paused(self.paused));
        report
    }

    /// Advance the blink clock by `elapsed_ms`.
    ///
    /// The cursor flashes once the configured interval has accumulated; the
    /// accumulator then starts again from zero. The cursor keeps flashing
    /// while paused and stops once the game is over.
    pub fn tick(&mut self, elapsed_ms: u32) -> Report {
        let mut report = Report::default();
        if self.is_over() {
            return report;
        }

        self.blink_elapsed_ms = self.blink_elapsed_ms.saturating_add(elapsed_ms);
        if self.blink_elapsed_ms >= self.config.blink_interval_ms {
            self.blink_elapsed_ms = 0;
            report.redraw(self.cursor.tick_blink(&self.board));
        }
        report
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let turn = self.engine.turn();
        self.board.write_grid(&mut out.board);
        out.cursor = self.cursor.position();
        out.cursor_visible = self.cursor.visible();
        out.glyph = self.cursor.glyph();
        out.phase = turn.phase;
        out.active_player = turn.active_player;
        out.pieces = turn.pieces_placed_by;
        out.picked_up_from = turn.picked_up_from;
        out.valid_target = self.valid_target();
        out.paused = self.paused;
        out.winner = self.winner;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
