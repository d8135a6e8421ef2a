//! Shared test utilities for splitscope
//!
//! - Fixture arrays and seeded sessions
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
