//! Combatant stats and vitality.

use crate::error::StatError;

/// One participant in an encounter.
///
/// Only vitality changes after construction, and only through the combat
/// resolver and the battle engine. Everything else is read-only.
///
/// The serialized field names (`health`, `damage`, `armor`, `resist`) are the
/// save-file vocabulary and must stay stable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CombatantRecord"))]
pub struct Combatant {
    name: String,
    #[cfg_attr(feature = "serde", serde(rename = "health"))]
    vitality: f64,
    #[cfg_attr(feature = "serde", serde(rename = "damage"))]
    power: f64,
    #[cfg_attr(feature = "serde", serde(rename = "armor"))]
    mitigation: f64,
    #[cfg_attr(feature = "serde", serde(rename = "resist"))]
    resistance: f64,
}

impl Combatant {
    /// Creates a combatant, rejecting non-finite stats and negative
    /// `power`/`mitigation`.
    ///
    /// `vitality` may start at or below zero (a defeated combatant restored
    /// from a save). `resistance` is only checked for finiteness: values at or
    /// above 1.0 are accepted and yield zero or negative damage.
    pub fn new(
        name: impl Into<String>,
        vitality: f64,
        power: f64,
        mitigation: f64,
        resistance: f64,
    ) -> Result<Self, StatError> {
        let vitality = StatError::finite("vitality", vitality)?;
        let power = StatError::non_negative("power", power)?;
        let mitigation = StatError::non_negative("mitigation", mitigation)?;
        let resistance = StatError::finite("resistance", resistance)?;

        Ok(Self {
            name: name.into(),
            vitality,
            power,
            mitigation,
            resistance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vitality(&self) -> f64 {
        self.vitality
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn mitigation(&self) -> f64 {
        self.mitigation
    }

    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Alive iff vitality is strictly positive. Evaluated on every call.
    pub fn is_alive(&self) -> bool {
        self.vitality > 0.0
    }

    /// Subtracts `amount` from vitality. No clamping: vitality may go negative.
    pub(crate) fn take_damage(&mut self, amount: f64) {
        self.vitality -= amount;
    }

    pub(crate) fn recover(&mut self, amount: f64) {
        self.vitality += amount;
    }
}

impl core::fmt::Display for Combatant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Health={:.2}, Damage={}, Armor={}, Resist={:.2}",
            self.name, self.vitality, self.power, self.mitigation, self.resistance
        )
    }
}

/// Raw save-file shape, validated into a [`Combatant`] on load.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CombatantRecord {
    name: String,
    health: f64,
    damage: f64,
    armor: f64,
    resist: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CombatantRecord> for Combatant {
    type Error = StatError;

    fn try_from(record: CombatantRecord) -> Result<Self, Self::Error> {
        Combatant::new(
            record.name,
            record.health,
            record.damage,
            record.armor,
            record.resist,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_only_above_zero() {
        let mut hero = Combatant::new("Hero", 1.0, 10.0, 0.0, 0.0).unwrap();
        assert!(hero.is_alive());

        hero.take_damage(1.0);
        assert!(!hero.is_alive());

        hero.take_damage(5.5);
        assert_eq!(hero.vitality(), -5.5);
        assert!(!hero.is_alive());

        hero.recover(6.0);
        assert!(hero.is_alive());
    }

    #[test]
    fn rejects_negative_power_and_mitigation() {
        assert_eq!(
            Combatant::new("Hero", 10.0, -1.0, 0.0, 0.0),
            Err(StatError::Negative {
                stat: "power",
                value: -1.0
            })
        );
        assert_eq!(
            Combatant::new("Hero", 10.0, 1.0, -0.5, 0.0),
            Err(StatError::Negative {
                stat: "mitigation",
                value: -0.5
            })
        );
    }

    #[test]
    fn rejects_non_finite_stats() {
        assert!(matches!(
            Combatant::new("Hero", f64::NAN, 1.0, 0.0, 0.0),
            Err(StatError::NotFinite {
                stat: "vitality",
                ..
            })
        ));
        assert!(matches!(
            Combatant::new("Hero", 10.0, 1.0, 0.0, f64::INFINITY),
            Err(StatError::NotFinite {
                stat: "resistance",
                ..
            })
        ));
    }

    #[test]
    fn resistance_is_not_clamped() {
        let tank = Combatant::new("Tank", 10.0, 1.0, 0.0, 1.5).unwrap();
        assert_eq!(tank.resistance(), 1.5);

        let defeated = Combatant::new("Ghost", -3.0, 1.0, 0.0, 0.0).unwrap();
        assert!(!defeated.is_alive());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn uses_save_file_field_names() {
        let hero = Combatant::new("Hero", 80.0, 15.0, 6.0, 0.25).unwrap();
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Hero",
                "health": 80.0,
                "damage": 15.0,
                "armor": 6.0,
                "resist": 0.25
            })
        );

        let back: Combatant = serde_json::from_value(json).unwrap();
        assert_eq!(back, hero);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_stats() {
        let json = r#"{"name":"Hero","health":80,"damage":-2,"armor":6,"resist":0.1}"#;
        let err = serde_json::from_str::<Combatant>(json).unwrap_err();
        assert!(err.to_string().contains("power must be non-negative"));
    }
}
