//! CPF validation: length, repeated digits, and both check digits.

use crate::checksum::{check_digit, has_all_equal_digits, FIRST_WEIGHT, SECOND_WEIGHT};
use crate::digits::{extract, BASE_LENGTH};
use crate::error::{CheckDigit, ValidationError};
use crate::types::Cpf;

/// Validate a candidate and return the parsed [`Cpf`].
///
/// This performs, in order:
/// - Cleaning (every non-digit character is dropped)
/// - Length check (exactly 11 digits)
/// - Repeated digit rejection (`000.000.000-00` through `999.999.999-99`)
/// - First check digit, over digits 0..9 with weights 10..=2
/// - Second check digit, over digits 0..10 with weights 11..=2
pub fn validate_cpf(input: &str) -> Result<Cpf, ValidationError> {
    // 1. Clean and check length
    let digits = extract(input).map_err(|found| ValidationError::WrongLength { found })?;

    // 2. Degenerate sequences pass the arithmetic but are never issued
    if has_all_equal_digits(&digits) {
        return Err(ValidationError::RepeatedDigits);
    }

    // 3. First check digit
    let expected = check_digit(&digits[..BASE_LENGTH], FIRST_WEIGHT);
    verify(CheckDigit::First, expected, &digits)?;

    // 4. Second check digit
    let expected = check_digit(&digits[..=BASE_LENGTH], SECOND_WEIGHT);
    verify(CheckDigit::Second, expected, &digits)?;

    Ok(Cpf::from_validated(digits))
}

/// Check whether a candidate is a valid CPF.
///
/// Any formatting noise is tolerated. Never fails: malformed input is
/// simply invalid.
pub fn validate(input: &str) -> bool {
    validate_cpf(input).is_ok()
}

fn verify(position: CheckDigit, expected: u8, digits: &[u8]) -> Result<(), ValidationError> {
    let found = digits[position.index()];
    if expected == found {
        Ok(())
    } else {
        Err(ValidationError::CheckDigitMismatch {
            position,
            expected,
            found,
        })
    }
}
