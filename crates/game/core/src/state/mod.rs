//! Authoritative encounter state.
//!
//! This module owns the combatants, the turn counter, and the history log.
//! Outside the crate the state is read-only; vitality changes flow through
//! [`crate::combat`] and [`crate::engine::BattleEngine`].
mod combatant;
mod encounter;
mod history;

pub use combatant::Combatant;
pub use encounter::{Encounter, Side};
pub use history::EventLog;
