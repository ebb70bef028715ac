//! Encounter session: a battle engine bound to a save slot and an RNG.
//!
//! The core engine only reports that an encounter was suspended. The session
//! is what actually writes the slot when that happens, and what turns a
//! stored slot back into a playable encounter.

mod restore;

pub use restore::{Restore, restore};

use arena_core::{BattleEngine, CombatRules, Encounter, Phase, RngOracle, Side, TurnReport};

use crate::error::Result;
use crate::repository::EncounterRepository;

/// Result of the save triggered by a `save` action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveReceipt {
    Saved,
    Failed(String),
}

impl SaveReceipt {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// Failure message, if the save did not go through.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Saved => None,
            Self::Failed(message) => Some(message),
        }
    }
}

/// One submitted action and its consequences.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionStep {
    pub report: TurnReport,

    /// Present only when the action was `save`.
    pub save: Option<SaveReceipt>,
}

/// A playable encounter.
///
/// Owns the engine, the store, and the RNG for the encounter's lifetime.
pub struct Session<S, R> {
    engine: BattleEngine,
    store: S,
    rng: R,
}

impl<S, R> Session<S, R>
where
    S: EncounterRepository,
    R: RngOracle,
{
    pub fn new(encounter: Encounter, rules: CombatRules, store: S, rng: R) -> Self {
        tracing::info!(
            "Encounter ready: {} vs {} at turn {}",
            encounter.player().name(),
            encounter.enemy().name(),
            encounter.turn()
        );

        Self {
            engine: BattleEngine::with_rules(encounter, rules),
            store,
            rng,
        }
    }

    /// Submit one raw action token.
    ///
    /// On `save` the encounter is written to the store and the session is
    /// suspended even if the write fails; the receipt carries the outcome.
    pub fn submit(&mut self, input: &str) -> Result<SessionStep> {
        let report = self.engine.step(input, &mut self.rng)?;

        if !report.recognized() {
            tracing::warn!("Unrecognized action {:?}; player skips the turn", input.trim());
        }

        tracing::debug!(
            turn = report.turn,
            events = report.events.len(),
            phase = %report.phase,
            "Turn resolved"
        );

        let save = match report.phase {
            Phase::Suspended => Some(self.persist()),
            Phase::Ended(victor) => {
                self.log_outcome(victor);
                None
            }
            _ => None,
        };

        Ok(SessionStep { report, save })
    }

    fn persist(&self) -> SaveReceipt {
        match self.store.save(self.engine.encounter()) {
            Ok(()) => {
                tracing::info!("Encounter suspended at turn {}", self.engine.turn());
                SaveReceipt::Saved
            }
            Err(e) => {
                tracing::warn!("Failed to save encounter: {}", e);
                SaveReceipt::Failed(e.to_string())
            }
        }
    }

    fn log_outcome(&self, victor: Side) {
        let encounter = self.engine.encounter();
        tracing::info!(
            "Encounter ended on turn {}: {} wins ({} history entries)",
            encounter.turn(),
            encounter.combatant(victor).name(),
            encounter.history().len()
        );
    }

    pub fn encounter(&self) -> &Encounter {
        self.engine.encounter()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }

    pub fn victor(&self) -> Option<Side> {
        self.engine.phase().victor()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_encounter(self) -> Encounter {
        self.engine.into_encounter()
    }
}
