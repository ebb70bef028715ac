//! Encounter state: the two combatants, the turn counter, and the history.

use core::num::NonZeroU32;

use super::{Combatant, EventLog};

/// Which side of the encounter a combatant is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

/// Complete persisted state of one encounter.
///
/// The same two combatants stay in place for the whole encounter. `turn`
/// starts at 1 and is never zero; a save with `"turn": 0` fails to load.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    player: Combatant,
    enemy: Combatant,
    turn: NonZeroU32,
    history: EventLog,
}

impl Encounter {
    /// Starts a fresh encounter at turn 1 with an empty history.
    pub fn new(player: Combatant, enemy: Combatant) -> Self {
        Self {
            player,
            enemy,
            turn: NonZeroU32::MIN,
            history: EventLog::new(),
        }
    }

    /// Rebuilds an encounter from previously persisted parts.
    pub fn restore(
        player: Combatant,
        enemy: Combatant,
        turn: NonZeroU32,
        history: EventLog,
    ) -> Self {
        Self {
            player,
            enemy,
            turn,
            history,
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn.get()
    }

    pub fn history(&self) -> &EventLog {
        &self.history
    }

    /// Returns the winning side once either combatant is down.
    ///
    /// The player's defeat is checked first, so a mutual knockout goes to the
    /// enemy.
    pub fn victor(&self) -> Option<Side> {
        if !self.player.is_alive() {
            Some(Side::Enemy)
        } else if !self.enemy.is_alive() {
            Some(Side::Player)
        } else {
            None
        }
    }

    /// Splits the encounter into disjoint mutable borrows for resolution.
    pub(crate) fn parts_mut(&mut self) -> (&mut Combatant, &mut Combatant, &mut EventLog) {
        (&mut self.player, &mut self.enemy, &mut self.history)
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turn = self.turn.saturating_add(1);
    }
}
