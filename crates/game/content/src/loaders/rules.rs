//! Rules file loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use arena_core::CombatRules;

use crate::loaders::{LoadResult, read_file};
use crate::roster::StatRanges;

/// Contents of `rules.toml`.
///
/// ```toml
/// [combat]
/// dodge_chance = 0.75
///
/// [stats]
/// health = { min = 50, max = 100 }
/// ```
///
/// Missing sections and fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesFile {
    pub combat: CombatRules,
    pub stats: StatRanges,
}

/// Loader for the rules file.
pub struct RulesLoader;

impl RulesLoader {
    pub const DEFAULT_FILE_NAME: &'static str = "rules.toml";

    /// Load rules from a TOML file. Stat ranges are validated.
    pub fn load(path: &Path) -> LoadResult<RulesFile> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse rules from TOML text.
    pub fn parse(content: &str) -> LoadResult<RulesFile> {
        let rules: RulesFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;
        rules.stats.validate()?;
        Ok(rules)
    }

    /// Load rules when a path is configured, otherwise use the defaults.
    pub fn load_optional(path: Option<&Path>) -> LoadResult<RulesFile> {
        match path {
            Some(path) => {
                let rules = Self::load(path)?;
                tracing::info!("Loaded rules from {}", path.display());
                Ok(rules)
            }
            None => Ok(RulesFile::default()),
        }
    }
}
