//! Platform-specific directory utilities.

use std::path::PathBuf;

const APP_NAME: &str = "arena";

/// Platform log directory, e.g. `~/.cache/arena/logs` on Linux.
///
/// Falls back to `/tmp/arena/logs` when no home directory is known.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME))
        .join("logs")
}

/// Platform data directory for the save slot, e.g. `~/.local/share/arena`.
///
/// Falls back to `./saves`.
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./saves"))
}
