//! Stat rolling and opponent selection.

use rand::Rng;
use serde::{Deserialize, Serialize};

use arena_core::{Combatant, StatError};

/// Errors raised while building a roster.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    #[error("roster needs at least two combatants, found {len}")]
    TooSmall { len: usize },

    #[error("player index {index} is out of range for a roster of {len}")]
    PlayerOutOfRange { index: usize, len: usize },

    #[error("{stat} range is invalid: min {min} > max {max}")]
    InvalidRange {
        stat: &'static str,
        min: f64,
        max: f64,
    },

    #[error(transparent)]
    Stat(#[from] StatError),
}

/// Inclusive bounds for one rolled stat.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatRange<T> {
    pub min: T,
    pub max: T,
}

impl<T> StatRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

/// Ranges used when rolling a catalog entry into a combatant.
///
/// Health, damage and armor are whole numbers; resist is a real number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatRanges {
    pub health: StatRange<u32>,
    pub damage: StatRange<u32>,
    pub armor: StatRange<u32>,
    pub resist: StatRange<f64>,
}

impl Default for StatRanges {
    fn default() -> Self {
        Self {
            health: StatRange::new(50, 100),
            damage: StatRange::new(10, 20),
            armor: StatRange::new(5, 10),
            resist: StatRange::new(0.1, 0.3),
        }
    }
}

impl StatRanges {
    /// Rejects inverted bounds and non-finite resist bounds.
    pub fn validate(&self) -> Result<(), RosterError> {
        let whole = [
            ("health", self.health),
            ("damage", self.damage),
            ("armor", self.armor),
        ];
        for (stat, range) in whole {
            if range.min > range.max {
                return Err(RosterError::InvalidRange {
                    stat,
                    min: f64::from(range.min),
                    max: f64::from(range.max),
                });
            }
        }

        let resist = self.resist;
        if !resist.min.is_finite() || !resist.max.is_finite() || resist.min > resist.max {
            return Err(RosterError::InvalidRange {
                stat: "resist",
                min: resist.min,
                max: resist.max,
            });
        }

        Ok(())
    }
}

/// Rolls fresh stats for one named combatant.
pub fn roll_combatant<R>(
    name: impl Into<String>,
    ranges: &StatRanges,
    rng: &mut R,
) -> Result<Combatant, RosterError>
where
    R: Rng + ?Sized,
{
    ranges.validate()?;
    Ok(roll_unchecked(name.into(), ranges, rng)?)
}

fn roll_unchecked<R>(name: String, ranges: &StatRanges, rng: &mut R) -> Result<Combatant, StatError>
where
    R: Rng + ?Sized,
{
    let health = rng.gen_range(ranges.health.min..=ranges.health.max);
    let damage = rng.gen_range(ranges.damage.min..=ranges.damage.max);
    let armor = rng.gen_range(ranges.armor.min..=ranges.armor.max);
    let resist = rng.gen_range(ranges.resist.min..=ranges.resist.max);

    Combatant::new(
        name,
        f64::from(health),
        f64::from(damage),
        f64::from(armor),
        resist,
    )
}

/// Rolls one combatant per name, in order.
pub fn roll_roster<R, I, S>(
    names: I,
    ranges: &StatRanges,
    rng: &mut R,
) -> Result<Vec<Combatant>, RosterError>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ranges.validate()?;

    let roster = names
        .into_iter()
        .map(|name| roll_unchecked(name.into(), ranges, rng))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Rolled stats for {} combatants", roster.len());
    Ok(roster)
}

/// Picks the opponent's index uniformly among everyone but the player.
pub fn choose_opponent<R>(
    roster: &[Combatant],
    player: usize,
    rng: &mut R,
) -> Result<usize, RosterError>
where
    R: Rng + ?Sized,
{
    let len = roster.len();
    if len < 2 {
        return Err(RosterError::TooSmall { len });
    }
    if player >= len {
        return Err(RosterError::PlayerOutOfRange { index: player, len });
    }

    // Draw from the len-1 other slots, then step over the player's index.
    let pick = rng.gen_range(0..len - 1);
    Ok(if pick >= player { pick + 1 } else { pick })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const NAMES: [&str; 4] = ["Diluc", "Jean", "Kaeya", "Lisa"];

    #[test]
    fn rolled_stats_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let ranges = StatRanges::default();

        for _ in 0..50 {
            let roster = roll_roster(NAMES, &ranges, &mut rng).unwrap();
            assert_eq!(roster.len(), NAMES.len());

            for c in &roster {
                assert!((50.0..=100.0).contains(&c.vitality()));
                assert!((10.0..=20.0).contains(&c.power()));
                assert!((5.0..=10.0).contains(&c.mitigation()));
                assert!((0.1..=0.3).contains(&c.resistance()));
                assert_eq!(c.vitality().fract(), 0.0);
                assert_eq!(c.power().fract(), 0.0);
                assert_eq!(c.mitigation().fract(), 0.0);
            }
        }
    }

    #[test]
    fn roster_keeps_catalog_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let roster = roll_roster(NAMES, &StatRanges::default(), &mut rng).unwrap();
        let names: Vec<_> = roster.iter().map(|c| c.name()).collect();
        assert_eq!(names, NAMES);
    }

    #[test]
    fn same_seed_same_roster() {
        let ranges = StatRanges::default();
        let a = roll_roster(NAMES, &ranges, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = roll_roster(NAMES, &ranges, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_ranges_are_exact() {
        let ranges = StatRanges {
            health: StatRange::new(70, 70),
            damage: StatRange::new(12, 12),
            armor: StatRange::new(6, 6),
            resist: StatRange::new(0.25, 0.25),
        };
        let c = roll_combatant("Noelle", &ranges, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(c, Combatant::new("Noelle", 70.0, 12.0, 6.0, 0.25).unwrap());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let ranges = StatRanges {
            armor: StatRange::new(10, 5),
            ..StatRanges::default()
        };
        let err = roll_roster(NAMES, &ranges, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, RosterError::InvalidRange { stat: "armor", .. }));
    }

    #[test]
    fn opponent_is_never_the_player() {
        let mut rng = StdRng::seed_from_u64(7);
        let roster = roll_roster(NAMES, &StatRanges::default(), &mut rng).unwrap();

        let mut seen = [false; 4];
        for _ in 0..200 {
            let enemy = choose_opponent(&roster, 2, &mut rng).unwrap();
            assert_ne!(enemy, 2);
            seen[enemy] = true;
        }
        assert_eq!(seen, [true, true, false, true]);
    }

    #[test]
    fn opponent_needs_two_combatants() {
        let mut rng = StdRng::seed_from_u64(0);
        let roster = roll_roster(["Solo"], &StatRanges::default(), &mut rng).unwrap();

        assert_eq!(
            choose_opponent(&roster, 0, &mut rng),
            Err(RosterError::TooSmall { len: 1 })
        );
        assert_eq!(
            choose_opponent(&[], 0, &mut rng),
            Err(RosterError::TooSmall { len: 0 })
        );
    }

    #[test]
    fn player_index_out_of_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let roster = roll_roster(NAMES, &StatRanges::default(), &mut rng).unwrap();
        assert_eq!(
            choose_opponent(&roster, 4, &mut rng),
            Err(RosterError::PlayerOutOfRange { index: 4, len: 4 })
        );
    }
}
