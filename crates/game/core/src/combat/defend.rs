//! Defend-and-counter resolution.

use crate::combat::basic_attack;
use crate::config::CombatRules;
use crate::env::RngOracle;
use crate::event::BattleEvent;
use crate::state::Combatant;

/// Result of the dodge roll.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DodgeOutcome {
    /// The defender took no damage.
    Evaded,
    /// The attack landed. `damage` was applied by [`basic_attack`] and
    /// `extra` was subtracted again on top of it.
    Hit { damage: f64, extra: f64 },
}

/// Everything a single defend action did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefendResolution {
    pub dodge: DodgeOutcome,
    pub recovered: u32,
    pub counter_damage: f64,
}

impl DefendResolution {
    /// History events in execution order: dodge/brace, recovery, counter.
    pub fn events(&self, defender: &str, opponent: &str) -> [BattleEvent; 3] {
        let first = match self.dodge {
            DodgeOutcome::Evaded => BattleEvent::Dodged {
                defender: defender.to_string(),
                attacker: opponent.to_string(),
            },
            DodgeOutcome::Hit { damage, extra } => BattleEvent::Braced {
                defender: defender.to_string(),
                attacker: opponent.to_string(),
                damage,
                extra,
            },
        };

        [
            first,
            BattleEvent::Recovered {
                defender: defender.to_string(),
                amount: self.recovered,
            },
            BattleEvent::CounterAttacked {
                defender: defender.to_string(),
                target: opponent.to_string(),
                damage: self.counter_damage,
            },
        ]
    }
}

/// Resolve a defend action for `actor` against `opponent`.
///
/// Draws exactly three values from `rng`, in order: dodge, recovery, counter.
///
/// 1. Dodge: evade with `rules.dodge_chance`. On failure the opponent's
///    [`basic_attack`] lands and `retaliation_factor * damage` is subtracted
///    from `actor.vitality` a second time (net 1.5x with default rules).
/// 2. Recovery: integer in `[recovery_min, recovery_max]` added to
///    `actor.vitality`, whether or not the dodge succeeded.
/// 3. Counter: `actor.power * U(counter_min, counter_max)` subtracted from
///    `opponent.vitality` directly, bypassing mitigation and resistance.
///
/// Mutates `actor.vitality` and `opponent.vitality` only.
pub fn defend<R>(
    actor: &mut Combatant,
    opponent: &mut Combatant,
    rules: &CombatRules,
    rng: &mut R,
) -> DefendResolution
where
    R: RngOracle + ?Sized,
{
    let dodge = if rng.chance(rules.dodge_chance) {
        DodgeOutcome::Evaded
    } else {
        let damage = basic_attack(opponent, actor);
        // Subtracted on top of the damage basic_attack already applied.
        let extra = damage * rules.retaliation_factor;
        actor.take_damage(extra);
        DodgeOutcome::Hit { damage, extra }
    };

    let recovered = rng.range(rules.recovery_min, rules.recovery_max);
    actor.recover(f64::from(recovered));

    let counter_damage = actor.power() * rng.uniform(rules.counter_min, rules.counter_max);
    opponent.take_damage(counter_damage);

    DefendResolution {
        dodge,
        recovered,
        counter_damage,
    }
}
