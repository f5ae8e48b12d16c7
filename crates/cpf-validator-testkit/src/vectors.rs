//! Golden test vectors for deterministic verification.
//!
//! Each vector pins the expected output of all three operations for one
//! input, so any implementation can be checked against the same table.

use cpf_validator_core::{clean, format, validate};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Raw candidate input.
    pub input: &'static str,
    /// Expected `clean` output.
    pub cleaned: &'static str,
    /// Expected `format` output (empty when not formattable).
    pub formatted: &'static str,
    /// Expected `validate` output.
    pub valid: bool,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "valid bare digits",
            input: "11144477735",
            cleaned: "11144477735",
            formatted: "111.444.777-35",
            valid: true,
        },
        GoldenVector {
            name: "valid formatted",
            input: "111.444.777-35",
            cleaned: "11144477735",
            formatted: "111.444.777-35",
            valid: true,
        },
        GoldenVector {
            name: "valid second number",
            input: "52998224725",
            cleaned: "52998224725",
            formatted: "529.982.247-25",
            valid: true,
        },
        GoldenVector {
            name: "valid second number formatted",
            input: "529.982.247-25",
            cleaned: "52998224725",
            formatted: "529.982.247-25",
            valid: true,
        },
        GoldenVector {
            name: "valid with first check digit zero",
            input: "123.456.789-09",
            cleaned: "12345678909",
            formatted: "123.456.789-09",
            valid: true,
        },
        GoldenVector {
            name: "spaces as separators",
            input: "111 444 777 35",
            cleaned: "11144477735",
            formatted: "111.444.777-35",
            valid: true,
        },
        GoldenVector {
            name: "mixed separators",
            input: "111.444.77735",
            cleaned: "11144477735",
            formatted: "111.444.777-35",
            valid: true,
        },
        GoldenVector {
            name: "label prefix",
            input: "CPF: 111.444.777-35",
            cleaned: "11144477735",
            formatted: "111.444.777-35",
            valid: true,
        },
        GoldenVector {
            name: "letters interleaved",
            input: "abc123def456ghi789jkl09",
            cleaned: "12345678909",
            formatted: "123.456.789-09",
            valid: true,
        },
        GoldenVector {
            name: "wrong second check digit",
            input: "111.444.777-36",
            cleaned: "11144477736",
            formatted: "111.444.777-36",
            valid: false,
        },
        GoldenVector {
            name: "wrong first check digit",
            input: "111.444.777-45",
            cleaned: "11144477745",
            formatted: "111.444.777-45",
            valid: false,
        },
        GoldenVector {
            name: "correct first, wrong second",
            input: "12345678900",
            cleaned: "12345678900",
            formatted: "123.456.789-00",
            valid: false,
        },
        GoldenVector {
            name: "all zeros",
            input: "00000000000",
            cleaned: "00000000000",
            formatted: "000.000.000-00",
            valid: false,
        },
        GoldenVector {
            name: "all ones formatted",
            input: "111.111.111-11",
            cleaned: "11111111111",
            formatted: "111.111.111-11",
            valid: false,
        },
        GoldenVector {
            name: "nine digits",
            input: "123456789",
            cleaned: "123456789",
            formatted: "",
            valid: false,
        },
        GoldenVector {
            name: "twelve digits",
            input: "123456789012",
            cleaned: "123456789012",
            formatted: "",
            valid: false,
        },
        GoldenVector {
            name: "empty",
            input: "",
            cleaned: "",
            formatted: "",
            valid: false,
        },
        GoldenVector {
            name: "letters only",
            input: "abcdefghijk",
            cleaned: "",
            formatted: "",
            valid: false,
        },
        GoldenVector {
            name: "punctuation only",
            input: "...---",
            cleaned: "",
            formatted: "",
            valid: false,
        },
    ]
}

/// Run every vector through the three operations.
///
/// Returns each vector's name with whether all outputs matched.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    all_vectors()
        .iter()
        .map(|v| {
            let matches = clean(v.input) == v.cleaned
                && format(v.input) == v.formatted
                && validate(v.input) == v.valid;
            (v.name.to_string(), matches)
        })
        .collect()
}
