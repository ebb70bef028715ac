//! In-memory EncounterRepository implementation for tests and local runs.

use std::sync::RwLock;

use arena_core::Encounter;

use crate::repository::{EncounterRepository, RepositoryError, Result, codec};

/// In-memory implementation of EncounterRepository.
///
/// Holds the encoded JSON rather than the value itself so that loads go
/// through the same validation as the file store.
pub struct InMemoryEncounterRepo {
    slot: RwLock<Option<String>>,
}

impl InMemoryEncounterRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Create with arbitrary stored text, valid or not.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(raw.into())),
        }
    }

    /// Raw stored text, if any.
    pub fn raw(&self) -> Result<Option<String>> {
        let slot = self.slot.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slot.clone())
    }
}

impl Default for InMemoryEncounterRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl EncounterRepository for InMemoryEncounterRepo {
    fn save(&self, encounter: &Encounter) -> Result<()> {
        let encoded = codec::encode(encounter)?;
        let mut slot = self
            .slot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(encoded);
        Ok(())
    }

    fn load(&self) -> Result<Option<Encounter>> {
        let slot = self.slot.read().map_err(|_| RepositoryError::LockPoisoned)?;
        slot.as_deref().map(codec::decode).transpose()
    }

    fn exists(&self) -> bool {
        self.slot
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::Combatant;

    #[test]
    fn empty_repo_loads_none() {
        let repo = InMemoryEncounterRepo::new();
        assert!(!repo.exists());
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let repo = InMemoryEncounterRepo::default();
        let encounter = Encounter::new(
            Combatant::new("Ganyu", 88.0, 19.0, 5.0, 0.22).unwrap(),
            Combatant::new("Ayaka", 91.0, 17.0, 8.0, 0.13).unwrap(),
        );

        repo.save(&encounter).unwrap();

        assert!(repo.exists());
        assert_eq!(repo.load().unwrap(), Some(encounter));
        assert!(repo.raw().unwrap().unwrap().contains("\"health\""));

        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn garbage_is_corrupt() {
        let repo = InMemoryEncounterRepo::from_raw("[1, 2, 3]");
        assert!(repo.exists());
        assert!(repo.load().unwrap_err().is_corrupt());
    }
}
