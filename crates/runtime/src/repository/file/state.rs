//! File-based EncounterRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use arena_core::Encounter;

use crate::repository::{EncounterRepository, RepositoryError, Result, codec};

/// File-based implementation of EncounterRepository.
///
/// Stores the single save slot as one pretty-printed JSON file.
///
/// # File Format
///
/// `{base_dir}/game_state.json` by default. Writes go to a `.tmp` sibling
/// first and are renamed into place, so a crash mid-write never leaves a
/// half-written slot behind.
pub struct FileEncounterRepository {
    path: PathBuf,
}

impl FileEncounterRepository {
    pub const DEFAULT_FILE_NAME: &'static str = "game_state.json";

    /// Create a repository storing `game_state.json` under `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        Self::with_file_name(base_dir, Self::DEFAULT_FILE_NAME)
    }

    /// Create a repository with a custom slot file name.
    pub fn with_file_name(base_dir: impl AsRef<Path>, file_name: &str) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(file_name),
        })
    }

    /// Path of the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl EncounterRepository for FileEncounterRepository {
    fn save(&self, encounter: &Encounter) -> Result<()> {
        let json = codec::encode(encounter)?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::info!(
            "Saved encounter at turn {} to {}",
            encounter.turn(),
            self.path.display()
        );

        Ok(())
    }

    fn load(&self) -> Result<Option<Encounter>> {
        if !self.path.exists() {
            tracing::debug!("No saved encounter at {}", self.path.display());
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => RepositoryError::CorruptData(e.to_string()),
            _ => RepositoryError::Io(e),
        })?;
        let encounter = codec::decode(&json)?;

        tracing::info!(
            "Loaded encounter at turn {} from {}",
            encounter.turn(),
            self.path.display()
        );

        Ok(Some(encounter))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::info!("Deleted saved encounter: {}", self.path.display());
        }

        Ok(())
    }
}
