//! # CPF Validator Testkit
//!
//! Testing utilities for CPF validation.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with their expected clean, format, and validate results
//! - **Generators**: Proptest strategies for valid numbers, invalid numbers, and formatting noise
//!
//! ## Golden Vectors
//!
//! ```rust
//! use cpf_validator_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! assert!(!all_vectors().is_empty());
//! for (name, ok) in verify_all_vectors() {
//!     assert!(ok, "vector '{}' failed", name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use cpf_validator_testkit::generators::{noisy, valid_cpf};
//!
//! proptest! {
//!     #[test]
//!     fn noise_is_tolerated(input in valid_cpf().prop_flat_map(|cpf| noisy(cpf.to_digit_string()))) {
//!         prop_assert!(cpf_validator_core::validate(&input));
//!     }
//! }
//! ```

pub mod generators;
pub mod vectors;

pub use generators::{digit_string, invalid_cpf, noisy, valid_base, valid_cpf};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
