//! Errors surfaced by the runtime session.
use thiserror::Error;

use arena_core::TurnError;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl SessionError {
    /// True when the session already ended or was suspended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Turn(TurnError::Terminal { .. }))
    }
}
