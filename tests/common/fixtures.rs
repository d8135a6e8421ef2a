//! Reproducible inputs for integration tests.

use splitscope::session::{ArrayGenerator, SearchSession, SessionLimits};
use splitscope::SortedArray;
use tempfile::TempDir;

/// Ten-element array used by the reference scenarios.
pub const TEN: [i64; 10] = [1, 5, 9, 12, 17, 23, 29, 34, 41, 50];

/// Session with a seeded generator so generated arrays are reproducible.
pub fn seeded_session(seed: u64) -> SearchSession {
    SearchSession::with_generator(SessionLimits::default(), ArrayGenerator::seeded(seed))
}

/// Session over a fixed array, any target accepted.
pub fn session_over(values: &[i64]) -> SearchSession {
    let mut session = SearchSession::new(SessionLimits::unbounded());
    session.set_array(SortedArray::new(values.to_vec()).expect("fixture must be sorted"));
    session
}

/// Empty directory to pass as `--data-dir`, so tests never touch `~/.splitscope`.
pub fn temp_data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
