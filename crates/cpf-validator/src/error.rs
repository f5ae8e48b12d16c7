//! Error types for the configurable validator.

use cpf_validator_core::ValidationError;
use thiserror::Error;

/// Errors reported by [`crate::Validator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The number itself is invalid.
    #[error("invalid CPF: {0}")]
    Invalid(#[from] ValidationError),

    /// Strict policy: input is neither bare digits nor `DDD.DDD.DDD-DD`.
    #[error("input is not in canonical CPF form")]
    NonCanonical,

    /// Input exceeds the configured maximum length.
    #[error("input length {len} exceeds maximum of {max}")]
    InputTooLong { len: usize, max: usize },
}

/// Result type for validator operations.
pub type Result<T> = std::result::Result<T, Error>;
