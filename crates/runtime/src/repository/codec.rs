//! JSON save format shared by every repository implementation.
//!
//! ```text
//! {
//!     "player": {"name": .., "health": .., "damage": .., "armor": .., "resist": ..},
//!     "enemy":  {"name": .., "health": .., "damage": .., "armor": .., "resist": ..},
//!     "turn": 3,
//!     "history": ["..", ".."]
//! }
//! ```

use arena_core::Encounter;
use serde::Serialize;

use super::{RepositoryError, Result};

const INDENT: &[u8] = b"    ";

/// Render an encounter as pretty-printed JSON (4-space indent).
pub(crate) fn encode(encounter: &Encounter) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    encounter
        .serialize(&mut serializer)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Parse and validate a stored encounter. Any failure is corrupt data.
pub(crate) fn decode(raw: &str) -> Result<Encounter> {
    serde_json::from_str(raw).map_err(|e| RepositoryError::CorruptData(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use arena_core::{Combatant, EventLog};

    use super::*;

    fn sample() -> Encounter {
        Encounter::restore(
            Combatant::new("Xiao", 41.5, 19.0, 7.0, 0.15).unwrap(),
            Combatant::new("Childe", -2.25, 17.0, 9.0, 0.3).unwrap(),
            NonZeroU32::new(7).unwrap(),
            EventLog::from(vec![
                "Xiao attacked Childe for 7.00 damage.".to_string(),
                "Childe attacked Xiao for 5.60 damage.".to_string(),
            ]),
        )
    }

    #[test]
    fn encode_decode_preserves_everything() {
        let encounter = sample();
        let raw = encode(&encounter).unwrap();
        assert_eq!(decode(&raw).unwrap(), encounter);
    }

    #[test]
    fn encodes_documented_layout() {
        let raw = encode(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["turn"], 7);
        assert_eq!(value["player"]["health"], 41.5);
        assert_eq!(value["enemy"]["resist"], 0.3);
        assert_eq!(value["history"][1], "Childe attacked Xiao for 5.60 damage.");
        assert!(raw.contains("\n    \"player\""));
    }

    #[test]
    fn accepts_integer_stats_from_older_saves() {
        let raw = r#"{
            "player": {"name": "Amber", "health": 73, "damage": 12, "armor": 5, "resist": 0.21},
            "enemy": {"name": "Lisa", "health": 64, "damage": 17, "armor": 9, "resist": 0.18},
            "turn": 2,
            "history": ["Amber attacked Lisa for 2.46 damage."]
        }"#;

        let encounter = decode(raw).unwrap();
        assert_eq!(encounter.player().vitality(), 73.0);
        assert_eq!(encounter.turn(), 2);
        assert_eq!(encounter.history().len(), 1);
    }

    #[test]
    fn rejects_malformed_input_as_corrupt() {
        for raw in [
            "",
            "not json",
            r#"{"player": {}}"#,
            r#"{"player": {"name": "A", "health": 1, "damage": 1, "armor": 1, "resist": 0},
                "enemy": {"name": "B", "health": 1, "damage": 1, "armor": 1, "resist": 0},
                "turn": 0, "history": []}"#,
            r#"{"player": {"name": "A", "health": 1, "damage": -1, "armor": 1, "resist": 0},
                "enemy": {"name": "B", "health": 1, "damage": 1, "armor": 1, "resist": 0},
                "turn": 1, "history": []}"#,
        ] {
            assert!(decode(raw).unwrap_err().is_corrupt(), "accepted: {raw:?}");
        }
    }
}
