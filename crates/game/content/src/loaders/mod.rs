//! Content loaders for reading roster and rules files.
//!
//! The catalog is JSON (as written by the external fetcher); the rules file is
//! TOML.

pub mod catalog;
pub mod factory;
pub mod rules;

pub use catalog::{CatalogEntry, CatalogLoader};
pub use factory::ContentFactory;
pub use rules::{RulesFile, RulesLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
