use crate::config::VerifierConfig;
use crate::core::check_digit::compute_check_digit;
use crate::domain::model::{CheckDigit, Identifier, Isbn13, BODY_LEN, FULL_LEN};
use crate::domain::ports::IsbnInput;
use crate::utils::error::{IsbnError, Result};
use crate::utils::validation::validate_digit_count;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct IsbnVerifier {
    config: VerifierConfig,
}

impl IsbnVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Returns the canonical `<12 digits>-<check digit>` form of `input`.
    ///
    /// A 13-digit input is cut down to its first 12 digits and the check
    /// digit is recomputed. The supplied 13th digit is only compared when
    /// `strict_check_digit` is enabled.
    pub fn validate<T: IsbnInput>(&self, input: T) -> Result<Isbn13> {
        let digits = input.to_digit_string()?;
        validate_digit_count(digits.len(), BODY_LEN, FULL_LEN)?;

        let (body, supplied) = digits.split_at(BODY_LEN);
        let identifier = Identifier::from_digit_str(body)?;
        let check_digit = compute_check_digit(&identifier);

        if self.config.log_inputs {
            tracing::debug!("Computed check digit {} for {}", check_digit, identifier);
        } else {
            tracing::debug!("Computed check digit {}", check_digit);
        }

        if let Some(found) = supplied_check_digit(supplied) {
            if found != check_digit {
                if self.config.strict_check_digit {
                    return Err(IsbnError::CheckDigitMismatch {
                        expected: check_digit.value(),
                        found: found.value(),
                    });
                }
                tracing::warn!(
                    "Ignoring supplied check digit {}, recomputed {}",
                    found,
                    check_digit
                );
            }
        }

        Ok(Isbn13::new(identifier, check_digit))
    }

    /// Validates a dynamically typed value, e.g. a field decoded from JSON.
    pub fn validate_value(&self, value: &Value) -> Result<Isbn13> {
        self.validate(value)
    }

    /// True when `input` is a full 13-digit ISBN whose last digit is correct.
    pub fn is_valid<T: IsbnInput>(&self, input: T) -> bool {
        let Ok(digits) = input.to_digit_string() else {
            return false;
        };
        if digits.len() != FULL_LEN {
            return false;
        }

        let (body, supplied) = digits.split_at(BODY_LEN);
        match Identifier::from_digit_str(body) {
            Ok(identifier) => supplied_check_digit(supplied) == Some(compute_check_digit(&identifier)),
            Err(_) => false,
        }
    }
}

fn supplied_check_digit(rest: &str) -> Option<CheckDigit> {
    rest.bytes()
        .next()
        .filter(u8::is_ascii_digit)
        .map(|b| CheckDigit::new(b - b'0'))
}

/// Validates `number` with the default configuration.
///
/// Integer literals need a suffix (`978014300723u64`) since an unsuffixed
/// literal falls back to `i32`.
pub fn validate<T: IsbnInput>(number: T) -> Result<Isbn13> {
    IsbnVerifier::default().validate(number)
}

/// Validates a dynamically typed value with the default configuration.
pub fn validate_value(value: &Value) -> Result<Isbn13> {
    IsbnVerifier::default().validate_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use serde_json::json;

    fn strict() -> IsbnVerifier {
        IsbnVerifier::new(VerifierConfig {
            strict_check_digit: true,
            ..VerifierConfig::default()
        })
    }

    #[test]
    fn test_validate_twelve_digits() {
        assert_eq!(validate(978014300723u64).unwrap().to_string(), "978014300723-4");
        assert_eq!(validate(748174308791u64).unwrap().to_string(), "748174308791-7");
    }

    #[test]
    fn test_validate_ignores_wrong_thirteenth_digit() {
        let isbn = validate(9780143007239u64).unwrap();
        assert_eq!(isbn.to_string(), "978014300723-4");
    }

    #[test]
    fn test_validate_rejects_bad_lengths() {
        assert_eq!(validate(97801430072u64).unwrap_err().kind(), ErrorKind::Length);
        assert_eq!(
            validate(97801430072344u64).unwrap_err().kind(),
            ErrorKind::Length
        );
        assert_eq!(validate(0u64).unwrap_err().kind(), ErrorKind::Length);
        assert_eq!(validate(u64::MAX).unwrap_err().kind(), ErrorKind::Length);
    }

    #[test]
    fn test_validate_value_rejects_text() {
        let err = validate_value(&json!("921092")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(
            err.to_string(),
            "Expected an Integer, however string was given."
        );
    }

    #[test]
    fn test_free_validate_accepts_any_input() {
        assert_eq!(validate(-5i64).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(validate(&json!("921092")).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(
            validate(&json!(748174308791u64)).unwrap().to_string(),
            "748174308791-7"
        );
    }

    #[test]
    fn test_generic_inputs() {
        let verifier = IsbnVerifier::default();
        assert_eq!(
            verifier.validate(978014300723u128).unwrap().to_string(),
            "978014300723-4"
        );
        assert_eq!(
            verifier.validate(978014300723i64).unwrap().to_string(),
            "978014300723-4"
        );
        assert_eq!(
            verifier.validate(-978014300723i64).unwrap_err().kind(),
            ErrorKind::Type
        );
    }

    #[test]
    fn test_strict_mode_rejects_mismatch() {
        let err = strict().validate(9780143007239u64).unwrap_err();
        assert!(matches!(
            err,
            IsbnError::CheckDigitMismatch {
                expected: 4,
                found: 9
            }
        ));
    }

    #[test]
    fn test_strict_mode_accepts_matching_and_bare_body() {
        let verifier = strict();
        assert_eq!(
            verifier.validate(9780143007234u64).unwrap().to_string(),
            "978014300723-4"
        );
        assert_eq!(
            verifier.validate(978014300723u64).unwrap().to_string(),
            "978014300723-4"
        );
    }

    #[test]
    fn test_is_valid() {
        let verifier = IsbnVerifier::default();
        assert!(verifier.is_valid(9780143007234u64));
        assert!(verifier.is_valid(7481743087917u64));
        assert!(!verifier.is_valid(9780143007239u64));
        assert!(!verifier.is_valid(978014300723u64));
        assert!(!verifier.is_valid(&json!("9780143007234")));
    }

    #[test]
    fn test_quiet_logging_config_still_validates() {
        let verifier = IsbnVerifier::new(VerifierConfig {
            log_inputs: false,
            ..VerifierConfig::default()
        });
        assert_eq!(
            verifier.validate(748174308791u64).unwrap().to_string(),
            "748174308791-7"
        );
    }
}
