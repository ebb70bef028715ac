//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use crate::dirs;

/// Everything the composition root needs before it can build an [`crate::App`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub save_dir: PathBuf,
    pub characters_file: PathBuf,
    pub rules_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_dir: PathBuf,
    pub session_id: Option<String>,

    /// Variables that were set but could not be parsed. Logged by the caller
    /// once a subscriber is installed.
    pub ignored: Vec<&'static str>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            save_dir: dirs::data_dir(),
            characters_file: PathBuf::from("characters.json"),
            rules_file: None,
            seed: None,
            log_dir: dirs::log_dir(),
            session_id: None,
            ignored: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SAVE_DIR` - Directory holding `game_state.json` (default: platform data dir)
    /// - `ARENA_CHARACTERS_FILE` - Catalog cache (default: `characters.json`)
    /// - `ARENA_RULES_FILE` - Optional rules TOML
    /// - `ARENA_SEED` - Seed for every random roll (default: random)
    /// - `ARENA_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `ARENA_SESSION_ID` - Log session name (default: timestamp)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = read("ARENA_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }
        if let Some(file) = read("ARENA_CHARACTERS_FILE") {
            config.characters_file = PathBuf::from(file);
        }
        config.rules_file = read("ARENA_RULES_FILE").map(PathBuf::from);

        if let Some(raw) = read("ARENA_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config.ignored.push("ARENA_SEED"),
            }
        }

        if let Some(dir) = read("ARENA_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        config.session_id = read("ARENA_SESSION_ID");

        config
    }
}
