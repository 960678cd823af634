//! Terminal front-end for the Teeko engine.
//!
//! The engine only knows two collaborators: a display that colours single
//! cells and a status sink that receives notifications. This crate provides
//! both ([`LedMatrix`] and [`StatusPanel`]) plus the pieces that turn them
//! into terminal output: a framebuffer, a pure view, a diffing renderer and a
//! frame gate.

pub mod fb;
pub mod game_view;
pub mod matrix;
pub mod renderer;
pub mod status;
pub mod throttle;

pub use teeko_core as core;
pub use teeko_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Scene, Viewport};
pub use matrix::LedMatrix;
pub use renderer::{encode_changes, encode_full, ChangedRuns, Run, TerminalRenderer};
pub use status::{describe, StatusPanel};
pub use throttle::FrameGate;
