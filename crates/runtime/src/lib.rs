//! Runtime wiring for arena encounters.
//!
//! The core crate resolves turns without touching I/O. This crate adds the
//! pieces a playable encounter needs around it:
//! - [`repository`] stores the single save slot (JSON file or in-memory)
//! - [`session`] binds a battle engine to a store and an RNG, writing the
//!   slot when the player saves and reading it back on resume
pub mod error;
pub mod repository;
pub mod session;

pub use error::{Result, SessionError};
pub use repository::{
    EncounterRepository, FileEncounterRepository, InMemoryEncounterRepo, RepositoryError,
};
pub use session::{Restore, SaveReceipt, Session, SessionStep, restore};
