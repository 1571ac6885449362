//! Arena shooter simulation core.
//!
//! Exposed as a library so the integration tests in `tests/` (separate
//! crates) can boot the same gameplay set the binary runs.

pub mod common;
pub mod game;
pub mod plugins;
