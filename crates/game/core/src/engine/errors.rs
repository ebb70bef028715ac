//! Error types for the turn pipeline.

use super::Phase;

/// Errors surfaced while stepping a [`super::BattleEngine`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("encounter is over ({phase}); no further actions are accepted")]
    Terminal { phase: Phase },
}
