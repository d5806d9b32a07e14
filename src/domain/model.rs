use crate::utils::error::{IsbnError, Result};
use crate::utils::validation::{validate_ascii_digits, validate_digit_count};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of digits in an ISBN-13 body, without its check digit.
pub const BODY_LEN: usize = 12;
/// Number of digits in a full ISBN-13.
pub const FULL_LEN: usize = 13;

/// The 12-digit body of an ISBN-13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier([u8; BODY_LEN]);

impl Identifier {
    /// Builds an identifier from exactly 12 ASCII digits.
    pub fn from_digit_str(digits: &str) -> Result<Self> {
        validate_ascii_digits("identifier", digits)?;
        validate_digit_count(digits.len(), BODY_LEN, BODY_LEN)?;

        let mut body = [0u8; BODY_LEN];
        for (slot, b) in body.iter_mut().zip(digits.bytes()) {
            *slot = b - b'0';
        }
        Ok(Self(body))
    }

    /// Digit values (0-9), most significant first.
    pub fn digits(&self) -> &[u8; BODY_LEN] {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = IsbnError;

    /// Accepts the bare 12-digit body or a full 13-digit ISBN. A trailing
    /// 13th digit is dropped without being checked.
    fn from_str(s: &str) -> Result<Self> {
        validate_ascii_digits("identifier", s)?;
        validate_digit_count(s.len(), BODY_LEN, FULL_LEN)?;
        Self::from_digit_str(&s[..BODY_LEN])
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckDigit(u8);

impl CheckDigit {
    pub(crate) fn new(value: u8) -> Self {
        debug_assert!(value < 10);
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// Computes the check digit for a string of exactly 12 ASCII digits.
    pub fn from_digits(digits: &str) -> Result<Self> {
        let identifier = Identifier::from_digit_str(digits)?;
        Ok(crate::core::check_digit::compute_check_digit(&identifier))
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical `<body>-<check digit>` form of an ISBN-13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Isbn13 {
    identifier: Identifier,
    check_digit: CheckDigit,
}

impl Isbn13 {
    pub fn new(identifier: Identifier, check_digit: CheckDigit) -> Self {
        Self {
            identifier,
            check_digit,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }

    pub fn into_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.identifier, self.check_digit)
    }
}

impl From<Isbn13> for String {
    fn from(isbn: Isbn13) -> Self {
        isbn.to_string()
    }
}
