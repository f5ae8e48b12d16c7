//! The validated CPF value type.
//!
//! A [`Cpf`] can only be obtained through validation or from a base whose
//! check digits are computed here, so holding one proves the number is valid.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::checksum::{check_digits, has_all_equal_digits};
use crate::digits::{BASE_LENGTH, CPF_LENGTH};
use crate::error::ValidationError;
use crate::format::group;
use crate::region::FiscalRegion;
use crate::validation::validate_cpf;

/// Index of the digit that encodes the issuing fiscal region.
const REGION_INDEX: usize = 8;

/// A valid Brazilian individual taxpayer number.
///
/// Holds the 11 digit values (`0..=9`), check digits included.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cpf([u8; CPF_LENGTH]);

impl Cpf {
    /// Wrap digits that already passed [`validate_cpf`].
    pub(crate) const fn from_validated(digits: [u8; CPF_LENGTH]) -> Self {
        Self(digits)
    }

    /// Parse and validate any input, tolerating formatting noise.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        validate_cpf(input)
    }

    /// Build a CPF from its 9-digit base, computing both check digits.
    ///
    /// Fails when a base element is not a digit value, or when every base
    /// digit is the same (such bases always yield a repeated-digit number).
    pub fn from_base(base: [u8; BASE_LENGTH]) -> Result<Self, ValidationError> {
        if let Some((index, &value)) = base.iter().enumerate().find(|&(_, &d)| d > 9) {
            return Err(ValidationError::InvalidDigit { index, value });
        }
        if has_all_equal_digits(&base) {
            return Err(ValidationError::RepeatedDigits);
        }

        let [first, second] = check_digits(&base);
        let mut digits = [0u8; CPF_LENGTH];
        digits[..BASE_LENGTH].copy_from_slice(&base);
        digits[BASE_LENGTH] = first;
        digits[BASE_LENGTH + 1] = second;
        Ok(Self(digits))
    }

    /// All 11 digit values.
    pub const fn digits(&self) -> &[u8; CPF_LENGTH] {
        &self.0
    }

    /// The 9-digit base.
    pub fn base(&self) -> &[u8] {
        &self.0[..BASE_LENGTH]
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> [u8; 2] {
        [self.0[BASE_LENGTH], self.0[BASE_LENGTH + 1]]
    }

    /// The fiscal region that issued this number.
    pub fn fiscal_region(&self) -> FiscalRegion {
        FiscalRegion::ALL[usize::from(self.0[REGION_INDEX])]
    }

    /// The 11 digits without separators.
    pub fn to_digit_string(&self) -> String {
        self.0.iter().map(|&d| char::from(b'0' + d)).collect()
    }

    /// The `DDD.DDD.DDD-DD` notation.
    pub fn formatted(&self) -> String {
        group(&self.ascii())
    }

    /// Formatted notation with only the first three and last two digits
    /// visible, e.g. `111.***.***-35`.
    pub fn masked(&self) -> String {
        let mut ascii = self.ascii();
        for byte in &mut ascii[3..BASE_LENGTH] {
            *byte = b'*';
        }
        group(&ascii)
    }

    fn ascii(&self) -> [u8; CPF_LENGTH] {
        self.0.map(|d| b'0' + d)
    }
}

impl fmt::Debug for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cpf({})", self.formatted())
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.formatted())
    }
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
