//! The Validator: policy-driven CPF checks with structured logging.
//!
//! Wraps the pure core functions with a configurable input policy, for
//! callers such as form handlers that want to refuse loosely typed input
//! instead of cleaning it.

use cpf_validator_core::{is_canonical, validate_cpf, Cpf};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How much formatting noise the validator accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Any non-digit character is stripped before validation.
    #[default]
    Lenient,
    /// Only 11 bare digits or exactly `DDD.DDD.DDD-DD`.
    Strict,
}

/// Configuration for the Validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Accepted input shape.
    pub input_policy: InputPolicy,
    /// Maximum input length in bytes. `None` means unbounded.
    pub max_input_len: Option<usize>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            input_policy: InputPolicy::Lenient,
            max_input_len: None,
        }
    }
}

/// A configured CPF validator.
///
/// Stateless apart from its configuration; cheap to clone and safe to
/// share across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a new validator.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate `input` under the configured policy.
    pub fn parse(&self, input: &str) -> Result<Cpf> {
        let policy = self.config.input_policy;

        match self.check_shape(input).and_then(|()| validate_cpf(input).map_err(Error::from)) {
            Ok(cpf) => {
                tracing::trace!(
                    cpf = %cpf.masked(),
                    region = cpf.fiscal_region().number(),
                    ?policy,
                    "CPF accepted"
                );
                Ok(cpf)
            }
            Err(e) => {
                tracing::debug!(reason = %e, ?policy, "CPF rejected");
                Err(e)
            }
        }
    }

    /// Check whether `input` is a valid CPF under the configured policy.
    pub fn is_valid(&self, input: &str) -> bool {
        self.parse(input).is_ok()
    }

    /// Render a valid CPF as `DDD.DDD.DDD-DD`.
    ///
    /// Unlike [`cpf_validator_core::format`], check digits are verified:
    /// returns `None` for anything [`Validator::parse`] rejects.
    pub fn format(&self, input: &str) -> Option<String> {
        self.parse(input).ok().map(|cpf| cpf.formatted())
    }

    fn check_shape(&self, input: &str) -> Result<()> {
        if let Some(max) = self.config.max_input_len {
            if input.len() > max {
                return Err(Error::InputTooLong {
                    len: input.len(),
                    max,
                });
            }
        }

        if self.config.input_policy == InputPolicy::Strict && !is_canonical(input) {
            return Err(Error::NonCanonical);
        }

        Ok(())
    }
}
