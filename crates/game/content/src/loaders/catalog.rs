//! Cached character catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One character as listed in the catalog cache.
///
/// Only `name` is used for play; the rest is carried for display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: Option<String>,
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default)]
    pub rarity: Option<u32>,
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl CatalogEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Trimmed name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// Loader for the character catalog cache (`characters.json`).
pub struct CatalogLoader;

impl CatalogLoader {
    pub const DEFAULT_FILE_NAME: &'static str = "characters.json";

    /// Load the catalog, failing on a missing file or a non-array document.
    ///
    /// Individual entries that do not match [`CatalogEntry`] are skipped with
    /// a warning rather than failing the whole file.
    pub fn load(path: &Path) -> LoadResult<Vec<CatalogEntry>> {
        let content = read_file(path)?;
        let raw: Vec<serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog JSON: {}", e))?;

        let mut entries = Vec::with_capacity(raw.len());
        for (index, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<CatalogEntry>(value) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!("Skipping catalog entry {}: {}", index, e),
            }
        }

        Ok(entries)
    }

    /// Load the catalog, degrading to an empty one on any failure.
    pub fn load_or_empty(path: &Path) -> Vec<CatalogEntry> {
        if !path.exists() {
            tracing::warn!(
                "No character file found at {}; fetch and save characters first",
                path.display()
            );
            return Vec::new();
        }

        match Self::load(path) {
            Ok(entries) => {
                tracing::info!("Loaded {} catalog entries from {}", entries.len(), path.display());
                entries
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable catalog {}: {:#}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Names usable as combatants, in catalog order. Nameless entries are
    /// dropped.
    pub fn names(entries: &[CatalogEntry]) -> Vec<String> {
        entries
            .iter()
            .filter_map(|entry| {
                let name = entry.name();
                if name.is_none() {
                    tracing::debug!("Skipping catalog entry without a name");
                }
                name.map(str::to_owned)
            })
            .collect()
    }
}
