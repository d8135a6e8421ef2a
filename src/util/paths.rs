//! Path utilities for splitscope data directories

use std::path::PathBuf;
use std::sync::OnceLock;

/// Custom data directory set from the command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
///
/// Call early in `main()`, before config or logging paths are resolved.
/// `None` keeps the default `~/.splitscope`.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        tracing::debug!(path = %path.display(), "Data directory already initialized");
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".splitscope"))
        .unwrap_or_else(|| PathBuf::from(".splitscope"))
}

/// Base data directory: the custom path if set, otherwise `~/.splitscope`
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the logs directory (~/.splitscope/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the log file path (~/.splitscope/logs/splitscope.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("splitscope.log")
}

/// Get the config file path (~/.splitscope/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
