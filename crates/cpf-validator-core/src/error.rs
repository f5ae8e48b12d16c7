//! Error types for CPF validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::digits::BASE_LENGTH;

/// Which of the two trailing check digits failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckDigit {
    /// Tenth digit, computed over the first nine.
    First,
    /// Eleventh digit, computed over the first ten.
    Second,
}

impl CheckDigit {
    /// Zero-based position of this check digit in the cleaned sequence.
    pub const fn index(self) -> usize {
        match self {
            Self::First => BASE_LENGTH,
            Self::Second => BASE_LENGTH + 1,
        }
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Reasons a CPF candidate is rejected.
///
/// Variants are reported in the order the checks run, so a candidate
/// that breaks several rules reports the earliest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected 11 digits, found {found}")]
    WrongLength { found: usize },

    #[error("all digits are identical")]
    RepeatedDigits,

    #[error("{position} check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch {
        position: CheckDigit,
        expected: u8,
        found: u8,
    },

    #[error("base digit {value} at index {index} is not in 0..=9")]
    InvalidDigit { index: usize, value: u8 },
}
