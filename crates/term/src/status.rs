//! StatusPanel: the text collaborator.
//!
//! Collects [`StatusEvent`]s from the engine and words them for the side
//! panel. The engine decides *what* happened; this decides how it reads.

use std::collections::VecDeque;

use crate::core::StatusSink;
use crate::types::{Phase, Player, StatusEvent};

/// Messages kept for the log area
const HISTORY: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel {
    phase: Phase,
    player: Player,
    paused: bool,
    winner: Option<Player>,
    revision: u64,
    history: VecDeque<String>,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self {
            phase: Phase::Drop,
            player: Player::A,
            paused: false,
            winner: None,
            revision: 0,
            history: VecDeque::with_capacity(HISTORY),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Most recent message first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().rev().map(String::as_str)
    }

    /// "Current player: 1, green"
    pub fn player_line(&self) -> String {
        describe_player(self.player)
    }

    /// "Current phase: 2 (pick up)"
    pub fn phase_line(&self) -> String {
        describe(StatusEvent::PhaseChanged(self.phase))
    }

    fn push(&mut self, line: String) {
        if self.history.len() == HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(line);
    }
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn player_number(player: Player) -> usize {
    player.index() + 1
}

fn describe_player(player: Player) -> String {
    format!(
        "Current player: {}, {}",
        player_number(player),
        player.colour_name()
    )
}

/// Human wording for one notification.
pub fn describe(event: StatusEvent) -> String {
    match event {
        StatusEvent::NewGame => "New game".to_string(),
        StatusEvent::PhaseChanged(phase) => {
            format!("Current phase: {} ({})", phase.number(), phase)
        }
        StatusEvent::ActivePlayerChanged(player) => describe_player(player),
        StatusEvent::Paused(true) => "Paused".to_string(),
        StatusEvent::Paused(false) => "Resumed".to_string(),
        StatusEvent::GameOver(player) => format!("Winner is {}", player_number(player)),
    }
}

impl StatusSink for StatusPanel {
    fn notify(&mut self, event: StatusEvent) {
        match event {
            StatusEvent::NewGame => {
                self.history.clear();
                self.paused = false;
                self.winner = None;
            }
            StatusEvent::PhaseChanged(phase) => self.phase = phase,
            StatusEvent::ActivePlayerChanged(player) => self.player = player,
            StatusEvent::Paused(paused) => self.paused = paused,
            StatusEvent::GameOver(player) => self.winner = Some(player),
        }
        self.push(describe(event));
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wording_matches_panel_conventions() {
        assert_eq!(
            describe(StatusEvent::ActivePlayerChanged(Player::B)),
            "Current player: 2, red"
        );
        assert_eq!(
            describe(StatusEvent::PhaseChanged(Phase::PickUp)),
            "Current phase: 2 (pick up)"
        );
        assert_eq!(describe(StatusEvent::GameOver(Player::A)), "Winner is 1");
    }

    #[test]
    fn tracks_state_and_bounded_history() {
        let mut panel = StatusPanel::new();
        panel.notify(StatusEvent::GameOver(Player::B));
        assert_eq!(panel.winner(), Some(Player::B));

        for _ in 0..10 {
            panel.notify(StatusEvent::Paused(true));
        }
        assert_eq!(panel.history().count(), HISTORY);
        assert!(panel.paused());

        panel.notify(StatusEvent::NewGame);
        assert_eq!(panel.winner(), None);
        assert_eq!(panel.history().collect::<Vec<_>>(), vec!["New game"]);
    }
}
