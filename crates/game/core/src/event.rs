//! Typed battle events and their history rendering.
//!
//! The engine produces [`BattleEvent`]s; the [`crate::EventLog`] stores their
//! `Display` rendering. Those strings are the persisted history, so the
//! wording here is part of the save format.

use core::fmt;

/// One thing that happened during a turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// A basic attack landed (player attack or the opponent's turn).
    Attacked {
        attacker: String,
        target: String,
        damage: f64,
    },

    /// The defender evaded the incoming attack entirely.
    Dodged { defender: String, attacker: String },

    /// The dodge failed. `damage` is the nominal hit already applied by the
    /// attack primitive; `extra` is the additional amount subtracted on top.
    Braced {
        defender: String,
        attacker: String,
        damage: f64,
        extra: f64,
    },

    /// Unconditional recovery after defending.
    Recovered { defender: String, amount: u32 },

    /// Direct counter-attack damage, ignoring mitigation and resistance.
    CounterAttacked {
        defender: String,
        target: String,
        damage: f64,
    },
}

impl BattleEvent {
    /// Total vitality lost by the combatant on the receiving end.
    pub fn vitality_loss(&self) -> f64 {
        match self {
            Self::Attacked { damage, .. } | Self::CounterAttacked { damage, .. } => *damage,
            Self::Braced { damage, extra, .. } => damage + extra,
            Self::Dodged { .. } | Self::Recovered { .. } => 0.0,
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attacked {
                attacker,
                target,
                damage,
            } => write!(f, "{attacker} attacked {target} for {damage:.2} damage."),
            Self::Dodged { defender, attacker } => {
                write!(f, "{defender} dodged {attacker}'s attack.")
            }
            Self::Braced {
                defender, attacker, ..
            } => write!(f, "{defender} reduced the damage from {attacker}'s attack."),
            Self::Recovered { defender, amount } => {
                write!(f, "{defender} defended and recovered {amount} health.")
            }
            Self::CounterAttacked {
                defender,
                target,
                damage,
            } => write!(f, "{defender} counter-attacked {target} for {damage:.2} damage."),
        }
    }
}
