//! Modulo-11 check digit arithmetic.

use crate::digits::BASE_LENGTH;

/// Initial weight for the first check digit (covers 9 digits).
pub(crate) const FIRST_WEIGHT: u32 = 10;

/// Initial weight for the second check digit (covers 10 digits).
pub(crate) const SECOND_WEIGHT: u32 = 11;

/// Compute a single check digit.
///
/// Each digit is multiplied by a weight that starts at `initial_weight`
/// and drops by one per position. The result is `0` when the weighted sum
/// leaves a remainder below 2 modulo 11, otherwise `11 - remainder`.
pub(crate) fn check_digit(digits: &[u8], initial_weight: u32) -> u8 {
    debug_assert_eq!(digits.len() as u32 + 1, initial_weight);

    let sum: u32 = digits
        .iter()
        .zip((2..=initial_weight).rev())
        .map(|(&digit, weight)| u32::from(digit) * weight)
        .sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => (11 - remainder) as u8,
    }
}

/// True when every digit equals the first one (vacuously true when empty).
pub(crate) fn has_all_equal_digits(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Compute both check digits for a 9-digit base.
///
/// Every element of `base` must be in `0..=9`. Use [`crate::Cpf::from_base`]
/// when the base comes from untrusted input; it rejects out-of-range values.
///
/// # Panics
///
/// In debug builds, panics if any element of `base` is greater than 9.
pub fn check_digits(base: &[u8; BASE_LENGTH]) -> [u8; 2] {
    debug_assert!(
        base.iter().all(|&d| d <= 9),
        "check_digits base contains a non-digit value: {base:?}"
    );

    let first = check_digit(base, FIRST_WEIGHT);

    let mut extended = [0u8; BASE_LENGTH + 1];
    extended[..BASE_LENGTH].copy_from_slice(base);
    extended[BASE_LENGTH] = first;

    [first, check_digit(&extended, SECOND_WEIGHT)]
}
