//! Digit extraction from raw, possibly formatted input.

/// Number of digits in a CPF, check digits included.
pub const CPF_LENGTH: usize = 11;

/// Number of leading digits covered by the first check digit.
pub const BASE_LENGTH: usize = 9;

/// Strip every character that is not an ASCII decimal digit.
///
/// Relative order is preserved. Never fails; input without digits yields
/// an empty string.
pub fn clean(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Clean `input` into numeric digit values when it holds exactly
/// [`CPF_LENGTH`] digits.
///
/// Returns the number of digits found on any other length.
pub(crate) fn extract(input: &str) -> Result<[u8; CPF_LENGTH], usize> {
    let mut digits = [0u8; CPF_LENGTH];
    let mut found = 0usize;

    for byte in input.bytes().filter(u8::is_ascii_digit) {
        if found < CPF_LENGTH {
            digits[found] = byte - b'0';
        }
        found += 1;
    }

    if found == CPF_LENGTH {
        Ok(digits)
    } else {
        Err(found)
    }
}
