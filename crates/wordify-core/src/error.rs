//! Error types for wordify-core.

use thiserror::Error;

use crate::validate::Hint;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during number conversion.
#[derive(Error, Debug)]
pub enum WordifyError {
    /// The input is not a valid integer representation; the hint says why.
    #[error("{hint}")]
    InvalidInput {
        /// Diagnostic classification of the rejected input.
        hint: Hint,
    },
}

impl WordifyError {
    /// The diagnostic hint behind this error.
    pub const fn hint(&self) -> Hint {
        match self {
            Self::InvalidInput { hint } => *hint,
        }
    }
}

/// Result type alias using [`WordifyError`].
pub type WordifyResult<T> = Result<T, WordifyError>;
