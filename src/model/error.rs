//! Construction errors for the atom model.
//!
//! Only building an atom can fail. Infeasible decays, refused bonds, and
//! unnamed elements are ordinary outcomes and never surface here.

use thiserror::Error;

use super::types::Particle;

/// An atom was requested with a particle count the model cannot hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A count was below zero.
    #[error("{particle} count must be non-negative, got {value}")]
    NegativeCount {
        /// Which particle count was rejected.
        particle: Particle,
        /// The rejected value.
        value: i64,
    },

    /// A count does not fit the model's counter width.
    #[error("{particle} count {value} exceeds the maximum of {max}")]
    CountTooLarge {
        /// Which particle count was rejected.
        particle: Particle,
        /// The rejected value.
        value: i64,
        /// Largest accepted count.
        max: u32,
    },
}

impl ValidationError {
    /// The particle whose count was rejected.
    pub fn particle(&self) -> Particle {
        match self {
            ValidationError::NegativeCount { particle, .. }
            | ValidationError::CountTooLarge { particle, .. } => *particle,
        }
    }
}

/// Failure to read an atom from its `protons,neutrons,electrons` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAtomError {
    #[error("expected 'protons,neutrons,electrons', got '{0}'")]
    Format(String),

    #[error("invalid particle count '{0}'")]
    Count(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
