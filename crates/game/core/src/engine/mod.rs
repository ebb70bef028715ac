//! Turn controller for a single encounter.
//!
//! The [`BattleEngine`] is the authoritative reducer for an [`Encounter`]. It
//! takes one player action per step, resolves the player's branch, lets the
//! opponent answer with a basic attack, advances the turn counter, and checks
//! for a winner. A `save` token suspends the encounter before the opponent
//! acts; the caller is responsible for persisting it.

mod errors;
mod phase;
mod turns;

pub use errors::TurnError;
pub use phase::Phase;

use crate::action::PlayerAction;
use crate::config::CombatRules;
use crate::event::BattleEvent;
use crate::state::{Encounter, Side};

/// Everything that happened during one step.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    /// Turn number the step resolved (before the increment).
    pub turn: u32,

    /// The parsed input.
    pub action: PlayerAction,

    /// Events appended to the history during this step, in order.
    pub events: Vec<BattleEvent>,

    /// Engine phase after the step.
    pub phase: Phase,
}

impl TurnReport {
    /// False when the input was not a known action token.
    pub fn recognized(&self) -> bool {
        self.action.token().is_some()
    }

    pub fn is_suspended(&self) -> bool {
        self.phase == Phase::Suspended
    }

    pub fn victor(&self) -> Option<Side> {
        self.phase.victor()
    }
}

/// Turn controller owning one encounter.
///
/// Initial phase is [`Phase::AwaitingAction`], or [`Phase::Ended`] when either
/// combatant is already down. `Ended` and `Suspended` are terminal: further
/// steps fail with [`TurnError::Terminal`].
#[derive(Clone, Debug)]
pub struct BattleEngine {
    encounter: Encounter,
    rules: CombatRules,
    phase: Phase,
}

impl BattleEngine {
    /// Creates an engine with the default rules.
    pub fn new(encounter: Encounter) -> Self {
        Self::with_rules(encounter, CombatRules::default())
    }

    /// An encounter that is already decided starts in [`Phase::Ended`] and
    /// accepts no input.
    pub fn with_rules(encounter: Encounter, rules: CombatRules) -> Self {
        let phase = match encounter.victor() {
            Some(side) => Phase::Ended(side),
            None => Phase::AwaitingAction,
        };

        Self {
            encounter,
            rules,
            phase,
        }
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    pub fn into_encounter(self) -> Encounter {
        self.encounter
    }

    pub fn rules(&self) -> &CombatRules {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn turn(&self) -> u32 {
        self.encounter.turn()
    }
}
