//! Property and golden-vector tests for the public surface.
//!
//! Covers the clean/format/validate contracts for arbitrary strings, and
//! checks that the configurable validator agrees with the pure functions.

use cpf_validator::{
    clean, format, is_canonical, validate, validate_cpf, Cpf, Error, InputPolicy, Validator,
    ValidatorConfig,
};
use cpf_validator_testkit::{digit_string, invalid_cpf, noisy, valid_cpf, verify_all_vectors};
use proptest::prelude::*;
use std::io;
use std::sync::{Arc, Mutex};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn is_formatted(s: &str) -> bool {
    s.len() == 14 && is_canonical(s)
}

#[test]
fn golden_vectors_pass() {
    for (name, ok) in verify_all_vectors() {
        assert!(ok, "golden vector '{}' did not match", name);
    }
}

#[test]
fn spec_examples() {
    assert!(!validate(""));
    assert!(!validate("123456789"));
    assert!(!validate("123456789012"));
    assert!(validate("11144477735"));
    assert!(validate("111.444.777-35"));
    assert!(validate("52998224725"));
    assert!(!validate("111.444.777-36"));
    assert!(validate("111 444 777 35"));
    assert!(validate("CPF: 111.444.777-35"));
}

#[test]
fn validator_logs_without_panicking() {
    init_tracing();

    let validator = Validator::default();
    assert!(validator.is_valid("529.982.247-25"));
    assert!(!validator.is_valid("529.982.247-26"));

    let strict = Validator::new(ValidatorConfig {
        input_policy: InputPolicy::Strict,
        max_input_len: Some(32),
    });
    assert_eq!(strict.parse("CPF 529.982.247-25"), Err(Error::NonCanonical));
}

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn logs_never_contain_raw_candidates() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    let rejected = [
        "111.444.777-36",
        "111.444.777-45",
        "00000000000",
        "123456789",
    ];
    let strict_rejected = "CPF 111.444.777-35";
    let too_long = "CPF number: 111.444.777-35";

    tracing::subscriber::with_default(subscriber, || {
        let lenient = Validator::default();
        assert!(lenient.parse("11144477735").is_ok());
        assert!(lenient.parse("111.444.777-35").is_ok());
        for candidate in rejected {
            assert!(lenient.parse(candidate).is_err());
        }

        let strict = Validator::new(ValidatorConfig {
            input_policy: InputPolicy::Strict,
            max_input_len: Some(20),
        });
        assert_eq!(strict.parse(strict_rejected), Err(Error::NonCanonical));
        assert_eq!(
            strict.parse(too_long),
            Err(Error::InputTooLong { len: 26, max: 20 })
        );
    });

    let output = logs.contents();
    assert!(output.contains("CPF accepted"), "{output}");
    assert!(output.contains("111.***.***-35"), "{output}");
    assert!(output.contains("CPF rejected"), "{output}");
    assert!(output.contains("reason="), "{output}");

    for leaked in ["11144477735", "444.777", strict_rejected, too_long] {
        assert!(!output.contains(leaked), "log output contains {leaked:?}: {output}");
    }
    for candidate in rejected {
        assert!(!output.contains(candidate), "log output contains {candidate:?}: {output}");
    }
}

#[test]
fn cpf_serializes_inside_structs() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Taxpayer {
        name: String,
        cpf: Cpf,
    }

    let taxpayer = Taxpayer {
        name: "Maria".into(),
        cpf: "11144477735".parse().unwrap(),
    };
    let json = serde_json::to_string(&taxpayer).unwrap();
    assert_eq!(json, r#"{"name":"Maria","cpf":"111.444.777-35"}"#);

    let back: Taxpayer = serde_json::from_str(&json).unwrap();
    assert_eq!(back, taxpayer);

    assert!(serde_json::from_str::<Taxpayer>(r#"{"name":"X","cpf":"111.444.777-36"}"#).is_err());
}

proptest! {
    #[test]
    fn clean_keeps_only_digits_in_order(s in any::<String>()) {
        let cleaned = clean(&s);
        prop_assert!(cleaned.bytes().all(|b| b.is_ascii_digit()));
        let expected: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(cleaned, expected);
    }

    #[test]
    fn clean_is_idempotent(s in any::<String>()) {
        let once = clean(&s);
        prop_assert_eq!(clean(&once), once.clone());
    }

    #[test]
    fn format_is_empty_unless_eleven_digits(s in any::<String>()) {
        prop_assume!(clean(&s).len() != 11);
        prop_assert_eq!(format(&s), "");
    }

    #[test]
    fn format_groups_eleven_digits(input in digit_string(11..12).prop_flat_map(noisy)) {
        let formatted = format(&input);
        prop_assert!(is_formatted(&formatted));
        prop_assert_eq!(clean(&formatted), clean(&input));
    }

    #[test]
    fn validate_never_accepts_wrong_length(digits in digit_string(0..30)) {
        prop_assume!(digits.len() != 11);
        prop_assert!(!validate(&digits));
    }

    #[test]
    fn valid_numbers_survive_noise(
        input in valid_cpf().prop_flat_map(|cpf| noisy(cpf.to_digit_string()))
    ) {
        prop_assert!(validate(&input));
        prop_assert!(Validator::default().is_valid(&input));
    }

    #[test]
    fn corrupted_check_digit_is_rejected(candidate in invalid_cpf()) {
        prop_assert!(!validate(&candidate));
        prop_assert!(Validator::default().format(&candidate).is_none());
        prop_assert_eq!(format(&candidate).len(), 14);
    }

    #[test]
    fn validate_agrees_with_detailed_check(s in any::<String>()) {
        prop_assert_eq!(validate(&s), validate_cpf(&s).is_ok());
    }

    #[test]
    fn cpf_display_parses_back(cpf in valid_cpf()) {
        let parsed: Cpf = cpf.to_string().parse().unwrap();
        prop_assert_eq!(parsed, cpf);
        prop_assert_eq!(format(&cpf.to_digit_string()), cpf.formatted());
    }
}
