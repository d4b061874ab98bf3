//! Error types for the simulation driver.

use thiserror::Error;

use crate::model::error::ValidationError;

/// Errors raised while loading or validating a simulation configuration.
///
/// Running a validated simulation cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The TOML text could not be parsed into a configuration.
    #[error("failed to parse simulation config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// An explicitly listed atom has an invalid particle count.
    #[error("invalid atom at index {index}")]
    InvalidAtom {
        /// Position of the atom in the `atoms` list.
        index: usize,
        /// The underlying validation failure.
        #[source]
        source: ValidationError,
    },

    /// The spawn range is empty.
    #[error("invalid proton range: min_protons {min} is greater than max_protons {max}")]
    InvalidProtonRange {
        /// Configured lower bound.
        min: u32,
        /// Configured upper bound.
        max: u32,
    },
}

impl Error {
    /// Creates an [`InvalidAtom`](Error::InvalidAtom) error.
    pub fn invalid_atom(index: usize, source: ValidationError) -> Self {
        Self::InvalidAtom { index, source }
    }
}
