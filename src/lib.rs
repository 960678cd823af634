//! Teeko (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the pieces that
//! only the binary needs: configuration, command line and logging setup.

pub mod cli;
pub mod config;
pub mod logging;

pub use teeko_core as core;
pub use teeko_input as input;
pub use teeko_term as term;
pub use teeko_types as types;
