use crate::utils::error::{IsbnError, Result};
use serde_json::Value;

/// A caller value that may carry an ISBN as a whole number.
///
/// Implementors convert themselves to a base-10 digit string, or fail with
/// [`IsbnError::InvalidType`] when they do not hold a non-negative integer.
pub trait IsbnInput {
    fn to_digit_string(&self) -> Result<String>;
}

macro_rules! impl_unsigned_input {
    ($($t:ty),*) => {
        $(
            impl IsbnInput for $t {
                fn to_digit_string(&self) -> Result<String> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

macro_rules! impl_signed_input {
    ($($t:ty),*) => {
        $(
            impl IsbnInput for $t {
                fn to_digit_string(&self) -> Result<String> {
                    if *self < 0 {
                        return Err(negative_integer());
                    }
                    Ok(self.to_string())
                }
            }
        )*
    };
}

impl_unsigned_input!(u8, u16, u32, u64, u128, usize);
impl_signed_input!(i8, i16, i32, i64, i128, isize);

impl IsbnInput for Value {
    fn to_digit_string(&self) -> Result<String> {
        match self {
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    return Ok(u.to_string());
                }

                // arbitrary_precision 保留原始文字，超出 u64 的整數仍是整數
                let text = n.to_string();
                match text.strip_prefix('-') {
                    Some(rest) if is_plain_integer(rest) => Err(negative_integer()),
                    None if is_plain_integer(&text) => Ok(text),
                    _ => Err(invalid_type("float")),
                }
            }
            other => Err(invalid_type(json_type_name(other))),
        }
    }
}

impl<T: IsbnInput + ?Sized> IsbnInput for &T {
    fn to_digit_string(&self) -> Result<String> {
        (**self).to_digit_string()
    }
}

fn is_plain_integer(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid_type(type_name: &str) -> IsbnError {
    IsbnError::InvalidType {
        type_name: type_name.to_string(),
    }
}

fn negative_integer() -> IsbnError {
    invalid_type("negative integer")
}
