//! # CPF Validator
//!
//! Validation, cleaning, and formatting for Brazilian individual taxpayer
//! numbers (CPF).
//!
//! ## Overview
//!
//! - [`clean`] strips every non-digit character
//! - [`format`] renders 11 digits as `DDD.DDD.DDD-DD`, or returns `""`
//! - [`validate`] checks length, repeated digits, and both check digits
//!
//! All three are pure and total: malformed input is reported through the
//! return value, never through a panic or an error.
//!
//! ## Usage
//!
//! ```rust
//! use cpf_validator::{format, validate, InputPolicy, Validator, ValidatorConfig};
//!
//! assert!(validate("111.444.777-35"));
//! assert_eq!(format("52998224725"), "529.982.247-25");
//!
//! let strict = Validator::new(ValidatorConfig {
//!     input_policy: InputPolicy::Strict,
//!     ..ValidatorConfig::default()
//! });
//! assert!(strict.is_valid("111.444.777-35"));
//! assert!(!strict.is_valid("CPF: 111.444.777-35"));
//! ```
//!
//! ## Re-exports
//!
//! - `cpf_validator::core` - the pure primitives crate

pub mod error;
pub mod validator;

pub use cpf_validator_core as core;

pub use error::{Error, Result};
pub use validator::{InputPolicy, Validator, ValidatorConfig};

pub use cpf_validator_core::{
    check_digits, clean, format, is_canonical, validate, validate_cpf, CheckDigit, Cpf,
    FiscalRegion, ValidationError, CPF_LENGTH,
};
