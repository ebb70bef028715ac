//! Repository contract for saving and loading the encounter slot.

use arena_core::Encounter;

use super::Result;

/// Single-slot store for a suspended encounter.
///
/// Every `save` replaces whatever was stored before. There is no versioning
/// and no merge.
pub trait EncounterRepository: Send + Sync {
    /// Persist the encounter, overwriting the slot.
    fn save(&self, encounter: &Encounter) -> Result<()>;

    /// Load the stored encounter.
    ///
    /// - `Ok(None)` when nothing has been saved
    /// - `Err(RepositoryError::CorruptData)` when the content cannot be parsed
    ///   or violates encounter invariants
    fn load(&self) -> Result<Option<Encounter>>;

    /// Check whether the slot holds anything (valid or not).
    fn exists(&self) -> bool;

    /// Empty the slot. Clearing an empty slot is not an error.
    fn clear(&self) -> Result<()>;
}

impl<T: EncounterRepository + ?Sized> EncounterRepository for &T {
    fn save(&self, encounter: &Encounter) -> Result<()> {
        (**self).save(encounter)
    }

    fn load(&self) -> Result<Option<Encounter>> {
        (**self).load()
    }

    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
