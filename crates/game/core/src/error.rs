//! Validation errors for combatant stats.
//!
//! Turn-level errors live with the engine in [`crate::engine`].

/// Rejected combatant stat.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StatError {
    #[error("{stat} must be a finite number (got {value})")]
    NotFinite { stat: &'static str, value: f64 },

    #[error("{stat} must be non-negative (got {value})")]
    Negative { stat: &'static str, value: f64 },
}

impl StatError {
    pub(crate) fn finite(stat: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NotFinite { stat, value })
        }
    }

    pub(crate) fn non_negative(stat: &'static str, value: f64) -> Result<f64, Self> {
        let value = Self::finite(stat, value)?;
        if value < 0.0 {
            Err(Self::Negative { stat, value })
        } else {
            Ok(value)
        }
    }
}
