//! Content factory bundling the catalog and rules paths.

use std::path::{Path, PathBuf};

use rand::Rng;

use arena_core::Combatant;

use crate::loaders::{CatalogLoader, LoadResult, RulesFile, RulesLoader};
use crate::roster::{StatRanges, roll_roster};

/// Loads everything a new encounter needs.
///
/// # Files
///
/// ```text
/// characters.json   catalog cache (required for a new game)
/// rules.toml        combat constants and stat ranges (optional)
/// ```
pub struct ContentFactory {
    catalog_path: PathBuf,
    rules_path: Option<PathBuf>,
}

impl ContentFactory {
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            rules_path: None,
        }
    }

    pub fn with_rules(mut self, rules_path: impl Into<PathBuf>) -> Self {
        self.rules_path = Some(rules_path.into());
        self
    }

    /// Load the rules file, or defaults when none is configured.
    pub fn load_rules(&self) -> LoadResult<RulesFile> {
        RulesLoader::load_optional(self.rules_path.as_deref())
    }

    /// Load the catalog and roll a combatant for every named entry.
    ///
    /// A missing or unreadable catalog yields an empty roster.
    pub fn roll_roster<R>(&self, ranges: &StatRanges, rng: &mut R) -> LoadResult<Vec<Combatant>>
    where
        R: Rng + ?Sized,
    {
        let entries = CatalogLoader::load_or_empty(&self.catalog_path);
        let names = CatalogLoader::names(&entries);
        Ok(roll_roster(names, ranges, rng)?)
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn rules_path(&self) -> Option<&Path> {
        self.rules_path.as_deref()
    }
}
