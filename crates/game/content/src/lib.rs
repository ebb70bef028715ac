//! Roster content and rules files.
//!
//! This crate turns static data into playable combatants:
//! - the cached character catalog (`characters.json`, JSON)
//! - the optional rules file (`rules.toml`, TOML) with combat constants and
//!   stat ranges
//! - the stat roller and opponent picker that build an encounter's two sides
//!
//! Content is read once at the start of an encounter and never appears in the
//! save slot except through the combatants it produced.

pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::{RosterError, StatRange, StatRanges, choose_opponent, roll_combatant, roll_roster};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogEntry, CatalogLoader, ContentFactory, RulesFile, RulesLoader};
