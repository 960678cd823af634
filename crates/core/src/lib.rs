//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the Teeko rules and nothing else. It has no dependency on
//! terminals, input devices or clocks:
//!
//! - **Deterministic**: the same sequence of actions and ticks always produces
//!   the same game
//! - **Side-effect free**: every call returns a [`Report`] of changed cells and
//!   status events instead of drawing anything
//! - **Allocation-free**: reports are fixed-capacity `ArrayVec`s
//!
//! # Module Structure
//!
//! - [`board`]: 5x5 grid of cell states
//! - [`cursor`]: wrapping, blinking selection cursor
//! - [`phase`]: drop / pick-up / put-down turn state machine
//! - [`win`]: four-in-a-line and 2x2 square detection
//! - [`session`]: the [`GameSession`] façade
//! - [`sink`]: display and status collaborator traits
//!
//! # Example
//!
//! ```
//! use teeko_core::GameSession;
//! use teeko_types::{CellState, GameAction, Phase, Player};
//!
//! let mut game = GameSession::default();
//! game.new_game();
//!
//! // The cursor starts in the centre; drop a piece there.
//! let report = game.apply_action(GameAction::Select);
//! assert!(report.outcome.unwrap().is_applied());
//! assert_eq!(game.board().cell_at(2, 2), CellState::PlayerA);
//! assert_eq!(game.active_player(), Player::B);
//! assert_eq!(game.phase(), Phase::Drop);
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`] with the milliseconds elapsed since the previous
//! call. The cursor flashes every `blink_interval_ms` (500ms by default).

pub mod board;
pub mod cursor;
pub mod phase;
pub mod session;
pub mod sink;
pub mod snapshot;
pub mod win;

pub use teeko_types as types;

pub use board::Board;
pub use cursor::{normalize, Cursor};
pub use phase::{PhaseEngine, Step, TurnState};
pub use session::{GameSession, SessionConfig};
pub use sink::{DisplaySink, Redraws, Report, StatusEvents, StatusSink};
pub use snapshot::GameSnapshot;
pub use win::WinDetector;
