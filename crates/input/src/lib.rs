//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. The engine
//! only ever sees those discrete actions, never raw key codes or bytes.

pub mod map;

pub use teeko_types as types;

pub use map::{handle_key_event, is_press, should_quit};
