//! Combat resolution system.
//!
//! Functions here take combatants by reference and document exactly which
//! fields they mutate. Randomness, where needed, comes from the caller.
//!
//! # Core Functions
//!
//! - `calculate_damage`: mitigation-then-resistance formula, no mutation
//! - `basic_attack`: the only primitive that applies formula damage
//! - `defend`: dodge or brace, recover, counter-attack

pub mod damage;
pub mod defend;

pub use damage::{basic_attack, calculate_damage};
pub use defend::{DefendResolution, DodgeOutcome, defend};
