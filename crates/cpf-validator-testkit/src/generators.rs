//! Proptest generators for property-based testing.

use proptest::prelude::*;

use cpf_validator_core::{Cpf, CPF_LENGTH};

/// Generate a 9-digit base whose digits are not all the same.
pub fn valid_base() -> impl Strategy<Value = [u8; 9]> {
    prop::array::uniform9(0u8..=9).prop_filter("repeated base", |base| {
        base.iter().any(|&d| d != base[0])
    })
}

/// Generate a valid CPF.
pub fn valid_cpf() -> impl Strategy<Value = Cpf> {
    prop::array::uniform9(0u8..=9).prop_filter_map("repeated base", |base| Cpf::from_base(base).ok())
}

/// Generate 11 bare digits that fail the second check digit.
pub fn invalid_cpf() -> impl Strategy<Value = String> {
    (valid_cpf(), 1u8..=9).prop_map(|(cpf, delta)| {
        let mut digits = *cpf.digits();
        digits[CPF_LENGTH - 1] = (digits[CPF_LENGTH - 1] + delta) % 10;
        digits.iter().map(|&d| char::from(b'0' + d)).collect()
    })
}

/// Generate a string of ASCII digits whose length falls in `len`.
pub fn digit_string(len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..=9, len)
        .prop_map(|digits| digits.iter().map(|&d| char::from(b'0' + d)).collect())
}

/// Generate a short run of characters that are never ASCII digits.
pub fn noise() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[ .\\-/]{0,2}",
        1 => "[^0-9]{0,3}",
    ]
}

/// Scatter noise before, between, and after the characters of `digits`.
pub fn noisy(digits: String) -> impl Strategy<Value = String> {
    let slots = digits.chars().count() + 1;
    prop::collection::vec(noise(), slots).prop_map(move |fragments| {
        let mut out = String::new();
        let mut fragments = fragments.into_iter();
        for c in digits.chars() {
            out.extend(fragments.next());
            out.push(c);
        }
        out.extend(fragments);
        out
    })
}
