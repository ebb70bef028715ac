use arena_core::Encounter;

use crate::repository::{EncounterRepository, RepositoryError};

/// What a resume attempt found in the save slot.
#[derive(Debug)]
pub enum Restore {
    Loaded(Encounter),
    /// Nothing saved: start a new encounter.
    Missing,
    /// The slot could not be used. Callers start fresh and report the error.
    Unavailable(RepositoryError),
}

impl Restore {
    pub fn into_encounter(self) -> Option<Encounter> {
        match self {
            Self::Loaded(encounter) => Some(encounter),
            Self::Missing | Self::Unavailable(_) => None,
        }
    }
}

/// Read the save slot without ever failing.
pub fn restore(store: &(impl EncounterRepository + ?Sized)) -> Restore {
    match store.load() {
        Ok(Some(encounter)) => Restore::Loaded(encounter),
        Ok(None) => {
            tracing::info!("No saved encounter found; starting fresh");
            Restore::Missing
        }
        Err(e) => {
            if e.is_corrupt() {
                tracing::warn!("Saved encounter is corrupt and was ignored: {}", e);
            } else {
                tracing::warn!("Saved encounter could not be read: {}", e);
            }
            Restore::Unavailable(e)
        }
    }
}
