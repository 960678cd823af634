#![allow(dead_code)]

use teeko::core::{GameSession, Report};
use teeko::types::GameAction;

/// Walk the cursor to `(x, y)` with single steps, the way a player would.
pub fn goto(session: &mut GameSession, x: u8, y: u8) {
    while session.cursor().position().x != x {
        session.apply_action(GameAction::MoveRight);
    }
    while session.cursor().position().y != y {
        session.apply_action(GameAction::MoveUp);
    }
}

pub fn select_at(session: &mut GameSession, x: u8, y: u8) -> Report {
    goto(session, x, y);
    session.apply_action(GameAction::Select)
}

/// Play a list of drops, alternating players from whoever is active.
pub fn drop_all(session: &mut GameSession, cells: &[(u8, u8)]) {
    for &(x, y) in cells {
        let report = select_at(session, x, y);
        assert!(
            report.outcome.is_some_and(|o| o.is_applied()),
            "drop at ({x}, {y}) rejected: {:?}",
            report.outcome
        );
    }
}
