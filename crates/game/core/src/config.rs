/// Tunable constants for the defend routine.
///
/// `Default` reproduces the reference rules exactly. A rules file may
/// override any subset of fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatRules {
    /// Probability that a defending combatant evades the incoming attack.
    pub dodge_chance: f64,

    /// Extra fraction of the nominal hit subtracted when the dodge fails.
    pub retaliation_factor: f64,

    /// Inclusive bounds of the integer recovery roll.
    pub recovery_min: u32,
    pub recovery_max: u32,

    /// Bounds of the counter-attack multiplier applied to the defender's power.
    pub counter_min: f64,
    pub counter_max: f64,
}

impl CombatRules {
    pub const DEFAULT_DODGE_CHANCE: f64 = 0.75;
    pub const DEFAULT_RETALIATION_FACTOR: f64 = 0.5;
    pub const DEFAULT_RECOVERY_MIN: u32 = 10;
    pub const DEFAULT_RECOVERY_MAX: u32 = 15;
    pub const DEFAULT_COUNTER_MIN: f64 = 0.5;
    pub const DEFAULT_COUNTER_MAX: f64 = 1.0;

    pub const fn new() -> Self {
        Self {
            dodge_chance: Self::DEFAULT_DODGE_CHANCE,
            retaliation_factor: Self::DEFAULT_RETALIATION_FACTOR,
            recovery_min: Self::DEFAULT_RECOVERY_MIN,
            recovery_max: Self::DEFAULT_RECOVERY_MAX,
            counter_min: Self::DEFAULT_COUNTER_MIN,
            counter_max: Self::DEFAULT_COUNTER_MAX,
        }
    }
}

impl Default for CombatRules {
    fn default() -> Self {
        Self::new()
    }
}
