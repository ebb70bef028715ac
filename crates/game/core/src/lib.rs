//! Deterministic duel rules shared by the runtime and front-ends.
//!
//! `arena-core` defines the canonical combat rules (damage formula, defend
//! routine, turn sequencing) and the encounter state they operate on. It does
//! no I/O and owns no randomness: every roll comes from an injected
//! [`RngOracle`]. All state mutation during play flows through
//! [`engine::BattleEngine`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use action::{ActionToken, PlayerAction};
pub use combat::{DefendResolution, DodgeOutcome, basic_attack, calculate_damage, defend};
pub use config::CombatRules;
pub use engine::{BattleEngine, Phase, TurnError, TurnReport};
pub use env::{PcgRng, RngOracle, ScriptedRng};
pub use error::StatError;
pub use event::BattleEvent;
pub use state::{Combatant, Encounter, EventLog, Side};
