//! Rendering cleaned digits into the grouped `DDD.DDD.DDD-DD` notation.

use crate::digits::{clean, CPF_LENGTH};

/// Length of the formatted notation, separators included.
pub const FORMATTED_LENGTH: usize = 14;

/// Format any input as `DDD.DDD.DDD-DD`.
///
/// The input is cleaned first. Returns an empty string unless exactly 11
/// digits remain. Check digits are not verified: a syntactically complete
/// but invalid number is still formatted.
pub fn format(input: &str) -> String {
    let cleaned = clean(input);
    if cleaned.len() != CPF_LENGTH {
        return String::new();
    }
    group(cleaned.as_bytes())
}

/// Check whether `input` is already in a canonical form: either 11 bare
/// ASCII digits or exactly `DDD.DDD.DDD-DD`.
pub fn is_canonical(input: &str) -> bool {
    let bytes = input.as_bytes();
    match bytes.len() {
        CPF_LENGTH => bytes.iter().all(u8::is_ascii_digit),
        FORMATTED_LENGTH => bytes.iter().enumerate().all(|(i, b)| match i {
            3 | 7 => *b == b'.',
            11 => *b == b'-',
            _ => b.is_ascii_digit(),
        }),
        _ => false,
    }
}

/// Group 11 ASCII digit characters. Callers guarantee the length.
pub(crate) fn group(ascii_digits: &[u8]) -> String {
    let mut out = String::with_capacity(FORMATTED_LENGTH);
    for (i, &b) in ascii_digits.iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(char::from(b));
    }
    out
}
