use core::fmt;

use crate::state::Side;

/// Turn controller state.
///
/// `ResolvingPlayerAction` and `ResolvingOpponentAction` are only observable
/// while a step is running; between steps the engine is either awaiting
/// input or terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    AwaitingAction,
    ResolvingPlayerAction,
    ResolvingOpponentAction,
    Ended(Side),
    Suspended,
}

impl Phase {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended(_) | Self::Suspended)
    }

    pub const fn victor(&self) -> Option<Side> {
        match self {
            Self::Ended(side) => Some(*side),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingAction => "awaiting_action",
            Self::ResolvingPlayerAction => "resolving_player_action",
            Self::ResolvingOpponentAction => "resolving_opponent_action",
            Self::Ended(Side::Player) => "ended(player)",
            Self::Ended(Side::Enemy) => "ended(enemy)",
            Self::Suspended => "suspended",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
