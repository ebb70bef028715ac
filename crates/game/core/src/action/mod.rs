//! Player action tokens.
//!
//! The driver hands the engine one raw token per turn. Recognized tokens are
//! matched case-insensitively after trimming; anything else is kept as
//! [`PlayerAction::Unrecognized`] and resolved as a player-side no-op.

/// Actions the player can choose each turn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionToken {
    Attack,
    Defend,
    Save,
}

/// A parsed turn input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    Known(ActionToken),
    /// Tolerated input: the player does nothing, the opponent still acts.
    Unrecognized(String),
}

impl PlayerAction {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        trimmed
            .parse::<ActionToken>()
            .map(Self::Known)
            .unwrap_or_else(|_| Self::Unrecognized(trimmed.to_string()))
    }

    pub fn token(&self) -> Option<ActionToken> {
        match self {
            Self::Known(token) => Some(*token),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<ActionToken> for PlayerAction {
    fn from(token: ActionToken) -> Self {
        Self::Known(token)
    }
}
