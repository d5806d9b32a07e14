use crate::utils::error::{IsbnError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_digit_count(actual: usize, min: usize, max: usize) -> Result<()> {
    if actual < min || actual > max {
        return Err(IsbnError::InvalidLength { min, max, actual });
    }
    Ok(())
}

pub fn validate_ascii_digits(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IsbnError::InvalidDigits {
            field: field_name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
