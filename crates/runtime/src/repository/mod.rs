//! Repository layer for the encounter save slot.
//!
//! Repositories handle data that CHANGES during play. Here that is a single
//! slot holding one suspended encounter. Static content (roster catalog,
//! rules) is loaded by `arena-content`, not by repositories.

mod codec;
mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileEncounterRepository;
pub use memory::InMemoryEncounterRepo;
pub use traits::EncounterRepository;
