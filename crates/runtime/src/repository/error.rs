//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
///
/// A missing save is not an error: `load` returns `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("encounter repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted data: {0}")]
    CorruptData(String),
}

impl RepositoryError {
    /// True when the stored content exists but cannot be used.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData(_))
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
