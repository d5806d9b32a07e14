pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::VerifierConfig;
pub use crate::core::check_digit::compute_check_digit;
pub use crate::core::verifier::{validate, validate_value, IsbnVerifier};
pub use domain::model::{CheckDigit, Identifier, Isbn13};
pub use domain::ports::IsbnInput;
pub use utils::error::{ErrorKind, IsbnError, Result};
pub use utils::validation::Validate;
