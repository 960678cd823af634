use crate::types::{CellState, CursorGlyph, Phase, Player, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of everything a front-end may want to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Indexed `[y][x]`
    pub board: [[CellState; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub cursor: Position,
    pub cursor_visible: bool,
    pub glyph: CursorGlyph,
    pub phase: Phase,
    pub active_player: Player,
    pub pieces: [u8; 2],
    pub picked_up_from: Option<Position>,
    /// Whether a select at the cursor would be accepted
    pub valid_target: bool,
    pub paused: bool,
    pub winner: Option<Player>,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn playable(&self) -> bool {
        !self.game_over() && !self.paused
    }

    pub fn cell(&self, pos: Position) -> CellState {
        self.board[pos.y as usize][pos.x as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[CellState::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            cursor: Position::new(BOARD_WIDTH / 2, BOARD_HEIGHT / 2),
            cursor_visible: false,
            glyph: CursorGlyph::Select,
            phase: Phase::Drop,
            active_player: Player::A,
            pieces: [0; 2],
            picked_up_from: None,
            valid_target: true,
            paused: false,
            winner: None,
        }
    }
}
