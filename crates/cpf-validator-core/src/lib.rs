//! # CPF Validator Core
//!
//! Pure primitives for Brazilian individual taxpayer numbers (CPF):
//! cleaning, formatting, and check digit validation.
//!
//! This crate contains no I/O and no state. Every function is total over
//! the string domain.
//!
//! ## Key Types
//!
//! - [`Cpf`] - A number that passed every validation rule
//! - [`FiscalRegion`] - The issuing region encoded in the ninth digit
//! - [`ValidationError`] - Why a candidate was rejected
//!
//! ## Quick Checks
//!
//! ```rust
//! use cpf_validator_core::{clean, format, validate};
//!
//! assert_eq!(clean("111.444.777-35"), "11144477735");
//! assert_eq!(format("11144477735"), "111.444.777-35");
//! assert!(validate("CPF: 111.444.777-35"));
//! assert!(!validate("111.444.777-36"));
//! ```

pub mod checksum;
pub mod digits;
pub mod error;
pub mod format;
pub mod region;
pub mod types;
pub mod validation;

pub use checksum::check_digits;
pub use digits::{clean, CPF_LENGTH};
pub use error::{CheckDigit, ValidationError};
pub use format::{format, is_canonical};
pub use region::FiscalRegion;
pub use types::Cpf;
pub use validation::{validate, validate_cpf};
