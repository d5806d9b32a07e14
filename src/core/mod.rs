pub mod check_digit;
pub mod verifier;

pub use crate::domain::model::{CheckDigit, Identifier, Isbn13};
pub use crate::domain::ports::IsbnInput;
pub use crate::utils::error::Result;
