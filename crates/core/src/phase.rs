//! Phase engine - the Teeko turn state machine
//!
//! | Phase   | Select at cursor                          | Next phase |
//! |---------|-------------------------------------------|------------|
//! | Drop    | place a piece on an empty cell            | Drop, or PickUp once both players placed all pieces |
//! | PickUp  | lift one of the active player's pieces    | PutDown |
//! | PutDown | place it on an empty king-adjacent cell   | PickUp |
//!
//! The active player changes after every Drop and PutDown, never after a
//! PickUp. A refused select leaves every piece of state untouched.

use tracing::{debug, trace};

use crate::board::Board;
use crate::cursor::Cursor;
use crate::types::{CellState, CursorGlyph, Phase, Player, Position, Reason, MAX_PIECES};

/// Who is to move, in which phase, and with what on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnState {
    pub active_player: Player,
    pub phase: Phase,
    /// Pieces each player currently has on the board, indexed by [`Player::index`]
    pub pieces_placed_by: [u8; 2],
    /// Origin of the lifted piece; `Some` only during `PutDown`
    pub picked_up_from: Option<Position>,
}

impl TurnState {
    pub fn new(first_player: Player) -> Self {
        Self {
            active_player: first_player,
            phase: Phase::Drop,
            pieces_placed_by: [0; 2],
            picked_up_from: None,
        }
    }

    pub fn pieces_of(&self, player: Player) -> u8 {
        self.pieces_placed_by[player.index()]
    }

    fn all_dropped(&self) -> bool {
        self.pieces_placed_by.iter().all(|&n| n >= MAX_PIECES)
    }
}

/// A select that went through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// New piece placed during the drop phase
    Dropped { at: Position, by: Player },
    /// Piece lifted off the board
    Lifted { from: Position, by: Player },
    /// Lifted piece set down again
    Placed { from: Position, at: Position, by: Player },
}

impl Step {
    /// The cell whose content changed
    pub fn position(&self) -> Position {
        match *self {
            Step::Dropped { at, .. } => at,
            Step::Lifted { from, .. } => from,
            Step::Placed { at, .. } => at,
        }
    }

    /// The player whose piece came to rest, if one did
    pub fn rested(&self) -> Option<Player> {
        match *self {
            Step::Dropped { by, .. } | Step::Placed { by, .. } => Some(by),
            Step::Lifted { .. } => None,
        }
    }
}

/// Turn/phase state machine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhaseEngine {
    turn: TurnState,
}

impl PhaseEngine {
    pub fn new(first_player: Player) -> Self {
        Self {
            turn: TurnState::new(first_player),
        }
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    pub fn active_player(&self) -> Player {
        self.turn.active_player
    }

    pub fn picked_up_from(&self) -> Option<Position> {
        self.turn.picked_up_from
    }

    /// Legality of a select at `at` in `phase`, with the refusal reason.
    pub fn check(&self, phase: Phase, board: &Board, at: Position) -> Result<(), Reason> {
        let target = board.at(at);
        let player = self.turn.active_player;

        match phase {
            Phase::Drop => {
                if !target.is_empty() {
                    return Err(Reason::OccupiedCell);
                }
                if self.turn.pieces_of(player) >= MAX_PIECES {
                    return Err(Reason::NoneRemaining);
                }
                Ok(())
            }
            Phase::PickUp => match target.owner() {
                None => Err(Reason::EmptyCell),
                Some(owner) if owner != player => Err(Reason::WrongOwner),
                Some(_) => Ok(()),
            },
            Phase::PutDown => {
                // Without an origin there is nothing in hand to put down.
                let Some(origin) = self.turn.picked_up_from else {
                    return Err(Reason::NoneRemaining);
                };
                if at == origin {
                    return Err(Reason::SameCell);
                }
                if !at.is_king_adjacent(origin) {
                    return Err(Reason::NotAdjacent);
                }
                if !target.is_empty() {
                    return Err(Reason::OccupiedCell);
                }
                Ok(())
            }
        }
    }

    /// Pure predicate used both to gate a select and to drive the
    /// valid/invalid indicator.
    pub fn validate_move(&self, phase: Phase, board: &Board, at: Position) -> bool {
        self.check(phase, board, at).is_ok()
    }

    /// Apply a select at the cursor for the current phase.
    pub fn apply(&mut self, board: &mut Board, cursor: &mut Cursor) -> Result<Step, Reason> {
        let at = cursor.position();
        let phase = self.turn.phase;
        let player = self.turn.active_player;

        if let Err(reason) = self.check(phase, board, at) {
            debug!(%phase, %player, %at, %reason, "select rejected");
            return Err(reason);
        }

        let step = match phase {
            Phase::Drop => {
                board.set(at, player.cell());
                self.turn.pieces_placed_by[player.index()] += 1;
                self.turn.active_player = player.opponent();
                if self.turn.all_dropped() {
                    self.turn.phase = Phase::PickUp;
                    debug!("all pieces dropped, moving to pick-up phase");
                }
                Step::Dropped { at, by: player }
            }
            Phase::PickUp => {
                board.set(at, CellState::Empty);
                self.turn.pieces_placed_by[player.index()] -= 1;
                self.turn.picked_up_from = Some(at);
                self.turn.phase = Phase::PutDown;
                cursor.set_glyph(CursorGlyph::PickUp);
                Step::Lifted { from: at, by: player }
            }
            Phase::PutDown => {
                let from = self.turn.picked_up_from.take().unwrap_or(at);
                board.set(at, player.cell());
                self.turn.pieces_placed_by[player.index()] += 1;
                self.turn.phase = Phase::PickUp;
                self.turn.active_player = player.opponent();
                cursor.set_glyph(CursorGlyph::Select);
                Step::Placed { from, at, by: player }
            }
        };

        trace!(?step, next_phase = %self.turn.phase, "select applied");
        Ok(step)
    }

    /// Put a lifted piece back where it came from.
    ///
    /// Returns the origin cell, or `None` when nothing is in hand. The active
    /// player keeps the turn and the phase returns to `PickUp`.
    pub fn cancel_pick_up(&mut self, board: &mut Board, cursor: &mut Cursor) -> Option<Position> {
        if self.turn.phase != Phase::PutDown {
            return None;
        }
        let origin = self.turn.picked_up_from.take()?;
        let player = self.turn.active_player;

        board.set(origin, player.cell());
        self.turn.pieces_placed_by[player.index()] += 1;
        self.turn.phase = Phase::PickUp;
        cursor.set_glyph(CursorGlyph::Select);

        debug!(%player, %origin, "pick-up abandoned");
        Some(origin)
    }
}

impl Default for PhaseEngine {
    fn default() -> Self {
        Self::new(Player::A)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_at(
        engine: &mut PhaseEngine,
        board: &mut Board,
        cursor: &mut Cursor,
        x: u8,
        y: u8,
    ) -> Result<Step, Reason> {
        *cursor = Cursor::at(Position::new(x, y));
        engine.apply(board, cursor)
    }

    #[test]
    fn test_drop_places_and_switches_player() {
        let mut engine = PhaseEngine::default();
        let mut board = Board::new();
        let mut cursor = Cursor::new();

        let step = select_at(&mut engine, &mut board, &mut cursor, 2, 2).unwrap();
        assert_eq!(
            step,
            Step::Dropped {
                at: Position::new(2, 2),
                by: Player::A
            }
        );
        assert_eq!(board.cell_at(2, 2), CellState::PlayerA);
        assert_eq!(engine.active_player(), Player::B);
        assert_eq!(engine.phase(), Phase::Drop);
        assert_eq!(engine.turn().pieces_of(Player::A), 1);
    }

    #[test]
    fn test_drop_on_occupied_cell_is_rejected() {
        let mut engine = PhaseEngine::default();
        let mut board = Board::new();
        let mut cursor = Cursor::new();
        select_at(&mut engine, &mut board, &mut cursor, 1, 1).unwrap();

        let before = engine.clone();
        let board_before = board.clone();
        assert_eq!(
            select_at(&mut engine, &mut board, &mut cursor, 1, 1),
            Err(Reason::OccupiedCell)
        );
        assert_eq!(engine, before);
        assert_eq!(board, board_before);
    }

    #[test]
    fn test_drop_without_pieces_left_is_rejected() {
        let mut engine = PhaseEngine::default();
        engine.turn.pieces_placed_by = [MAX_PIECES, 0];
        let board = Board::new();
        assert_eq!(
            engine.check(Phase::Drop, &board, Position::new(0, 0)),
            Err(Reason::NoneRemaining)
        );
    }

    #[test]
    fn test_pick_up_sets_origin_and_glyph() {
        let mut engine = PhaseEngine::default();
        engine.turn.phase = Phase::PickUp;
        engine.turn.pieces_placed_by = [MAX_PIECES, MAX_PIECES];
        let mut board = Board::new();
        board.set_cell(3, 3, CellState::PlayerA);
        let mut cursor = Cursor::new();

        let step = select_at(&mut engine, &mut board, &mut cursor, 3, 3).unwrap();
        assert_eq!(step.rested(), None);
        assert_eq!(board.cell_at(3, 3), CellState::Empty);
        assert_eq!(engine.phase(), Phase::PutDown);
        assert_eq!(engine.picked_up_from(), Some(Position::new(3, 3)));
        assert_eq!(engine.active_player(), Player::A);
        assert_eq!(cursor.glyph(), CursorGlyph::PickUp);
        assert_eq!(engine.turn().pieces_of(Player::A), MAX_PIECES - 1);
    }

    #[test]
    fn test_put_down_rules() {
        let mut engine = PhaseEngine::default();
        engine.turn.phase = Phase::PutDown;
        engine.turn.picked_up_from = Some(Position::new(2, 2));
        let mut board = Board::new();
        board.set_cell(3, 3, CellState::PlayerB);

        let check = |x, y| engine.check(Phase::PutDown, &board, Position::new(x, y));
        assert_eq!(check(2, 2), Err(Reason::SameCell));
        assert_eq!(check(4, 2), Err(Reason::NotAdjacent));
        assert_eq!(check(0, 0), Err(Reason::NotAdjacent));
        assert_eq!(check(3, 3), Err(Reason::OccupiedCell));
        assert_eq!(check(1, 1), Ok(()));
        assert_eq!(check(2, 3), Ok(()));
    }

    #[test]
    fn test_cancel_restores_piece() {
        let mut engine = PhaseEngine::default();
        engine.turn.phase = Phase::PickUp;
        engine.turn.pieces_placed_by = [MAX_PIECES, MAX_PIECES];
        let mut board = Board::new();
        board.set_cell(0, 4, CellState::PlayerA);
        let mut cursor = Cursor::new();
        select_at(&mut engine, &mut board, &mut cursor, 0, 4).unwrap();

        assert_eq!(
            engine.cancel_pick_up(&mut board, &mut cursor),
            Some(Position::new(0, 4))
        );
        assert_eq!(board.cell_at(0, 4), CellState::PlayerA);
        assert_eq!(engine.phase(), Phase::PickUp);
        assert_eq!(engine.picked_up_from(), None);
        assert_eq!(engine.active_player(), Player::A);
        assert_eq!(cursor.glyph(), CursorGlyph::Select);
        assert_eq!(engine.turn().pieces_of(Player::A), MAX_PIECES);

        assert_eq!(engine.cancel_pick_up(&mut board, &mut cursor), None);
    }
}
