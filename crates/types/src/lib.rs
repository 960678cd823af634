//! Shared types and constants for Teeko.
//!
//! Everything in this crate is plain data with no external dependencies, so it
//! can be used by the rule engine, the terminal front-end and the input layer
//! alike.
//!
//! # Board
//!
//! Teeko is played on a 5x5 grid. Coordinates are `(x, y)` with `x` growing to
//! the right and `y` growing upwards, so `(0, 0)` is the bottom-left cell.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BLINK_INTERVAL_MS` | 500 | Cursor flash period |
//! | `TICK_MS` | 10 | Main loop poll interval |
//!
//! # Examples
//!
//! ```
//! use teeko_types::{GameAction, Phase, Player, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Player::A.opponent(), Player::B);
//! assert_eq!(GameAction::from_str("select"), Some(GameAction::Select));
//! assert_eq!(GameAction::MoveLeft.direction(), Some((-1, 0)));
//! assert_eq!(Phase::PutDown.number(), 3);
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (5, 5));
//! ```

use std::fmt;

/// Board width in cells
pub const BOARD_WIDTH: u8 = 5;

/// Board height in cells
pub const BOARD_HEIGHT: u8 = 5;

/// Number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Pieces each player places during the drop phase
pub const MAX_PIECES: u8 = 4;

/// Cursor flash period in milliseconds
pub const BLINK_INTERVAL_MS: u32 = 500;

/// Main loop poll interval in milliseconds
pub const TICK_MS: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_and_timing_defaults() {
        assert_eq!(BOARD_WIDTH, 5);
        assert_eq!(BOARD_HEIGHT, 5);
        assert_eq!(BOARD_CELLS, 25);
        assert_eq!(MAX_PIECES, 4);
        assert_eq!(BLINK_INTERVAL_MS, 500);
    }

    #[test]
    fn visual_state_follows_cell_owner() {
        assert_eq!(VisualState::from(CellState::Empty), VisualState::Empty);
        assert_eq!(VisualState::from(CellState::PlayerA), VisualState::PlayerA);
        assert_eq!(VisualState::from(CellState::PlayerB), VisualState::PlayerB);
        assert_eq!(CursorGlyph::PickUp.visual(), VisualState::PickUpCursor);
    }

    #[test]
    fn chebyshev_distance_counts_diagonals_as_one() {
        let origin = Position::new(2, 2);
        assert_eq!(origin.chebyshev(Position::new(3, 3)), 1);
        assert_eq!(origin.chebyshev(Position::new(1, 2)), 1);
        assert_eq!(origin.chebyshev(Position::new(4, 3)), 2);
        assert_eq!(origin.chebyshev(origin), 0);
    }

    #[test]
    fn action_names_round_trip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveUp,
            GameAction::MoveDown,
            GameAction::Select,
            GameAction::Cancel,
            GameAction::Pause,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}

/// One of the two players
///
/// Player A (green) always has the first move unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Stable index for per-player tables (A = 0, B = 1)
    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// The board cell this player's pieces occupy
    pub fn cell(self) -> CellState {
        match self {
            Player::A => CellState::PlayerA,
            Player::B => CellState::PlayerB,
        }
    }

    /// Parse player from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use teeko_types::Player;
    ///
    /// assert_eq!(Player::from_str("a"), Some(Player::A));
    /// assert_eq!(Player::from_str("2"), Some(Player::B));
    /// assert_eq!(Player::from_str("c"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" | "1" | "green" => Some(Player::A),
            "b" | "2" | "red" => Some(Player::B),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::A => "a",
            Player::B => "b",
        }
    }

    /// Colour name shown next to the player on the status panel
    pub fn colour_name(&self) -> &'static str {
        match self {
            Player::A => "green",
            Player::B => "red",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "A"),
            Player::B => write!(f, "B"),
        }
    }
}

/// Content of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl CellState {
    /// The owning player, if the cell holds a piece
    pub fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::PlayerA => Some(Player::A),
            CellState::PlayerB => Some(Player::B),
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

/// What a display pixel should show
///
/// This is the full vocabulary of the display sink: the three board contents
/// plus the two cursor icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
    Cursor,
    PickUpCursor,
}

impl From<CellState> for VisualState {
    fn from(cell: CellState) -> Self {
        match cell {
            CellState::Empty => VisualState::Empty,
            CellState::PlayerA => VisualState::PlayerA,
            CellState::PlayerB => VisualState::PlayerB,
        }
    }
}

/// Which icon the cursor is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorGlyph {
    /// Normal selection cursor
    #[default]
    Select,
    /// Shown while a lifted piece is waiting to be put down
    PickUp,
}

impl CursorGlyph {
    pub fn visual(self) -> VisualState {
        match self {
            CursorGlyph::Select => VisualState::Cursor,
            CursorGlyph::PickUp => VisualState::PickUpCursor,
        }
    }
}

/// An in-bounds board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// King-move distance: the larger of the horizontal and vertical gaps
    pub fn chebyshev(self, other: Position) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// True for the eight cells surrounding `other`
    pub fn is_king_adjacent(self, other: Position) -> bool {
        self.chebyshev(other) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single cell that must be repainted, and what to paint it with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Redraw {
    pub pos: Position,
    pub visual: VisualState,
}

impl Redraw {
    pub fn new(pos: Position, visual: VisualState) -> Self {
        Self { pos, visual }
    }
}

/// Turn phase
///
/// The game starts in `Drop`. Once both players have dropped all their pieces
/// it alternates between `PickUp` and `PutDown` for the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Drop,
    PickUp,
    PutDown,
}

impl Phase {
    /// 1-based phase number shown to players
    pub fn number(self) -> u8 {
        match self {
            Phase::Drop => 1,
            Phase::PickUp => 2,
            Phase::PutDown => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Drop => "drop",
            Phase::PickUp => "pick up",
            Phase::PutDown => "put down",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a select action was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Target cell already holds a piece
    OccupiedCell,
    /// Nothing to pick up at the cursor
    EmptyCell,
    /// The piece at the cursor belongs to the opponent
    WrongOwner,
    /// Put-down target is more than one cell from the pick-up origin
    NotAdjacent,
    /// Put-down target is the pick-up origin itself
    SameCell,
    /// The active player has no pieces left to drop
    NoneRemaining,
    /// The session is paused
    Paused,
    /// The game has already been won
    GameOver,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::OccupiedCell => "cell is occupied",
            Reason::EmptyCell => "cell is empty",
            Reason::WrongOwner => "not your piece",
            Reason::NotAdjacent => "too far from origin",
            Reason::SameCell => "same cell as origin",
            Reason::NoneRemaining => "no pieces remaining",
            Reason::Paused => "game is paused",
            Reason::GameOver => "game is over",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of an attempted select action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Applied,
    Rejected(Reason),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }

    pub fn reason(&self) -> Option<Reason> {
        match self {
            MoveOutcome::Applied => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

/// Discrete input events
///
/// Every input source (keyboard, buttons, a scripted test) is reduced to these
/// before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Cursor one cell left (-x)
    MoveLeft,
    /// Cursor one cell right (+x)
    MoveRight,
    /// Cursor one cell up (+y)
    MoveUp,
    /// Cursor one cell down (-y)
    MoveDown,
    /// Drop, pick up or put down at the cursor depending on phase
    Select,
    /// Return a lifted piece to where it came from
    Cancel,
    /// Toggle pause state
    Pause,
    /// Abandon the current game and start a new one
    Restart,
}

impl GameAction {
    /// Cursor delta for movement actions
    pub fn direction(&self) -> Option<(i8, i8)> {
        match self {
            GameAction::MoveLeft => Some((-1, 0)),
            GameAction::MoveRight => Some((1, 0)),
            GameAction::MoveUp => Some((0, 1)),
            GameAction::MoveDown => Some((0, -1)),
            _ => None,
        }
    }

    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "select" => Some(GameAction::Select),
            "cancel" => Some(GameAction::Cancel),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Select => "select",
            GameAction::Cancel => "cancel",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Notifications for the text/status collaborator
///
/// These carry data only; turning them into text is the receiver's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEvent {
    /// A fresh game has started
    NewGame,
    PhaseChanged(Phase),
    ActivePlayerChanged(Player),
    Paused(bool),
    /// The given player completed a winning pattern
    GameOver(Player),
}
