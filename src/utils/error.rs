use thiserror::Error;

#[derive(Error, Debug)]
pub enum IsbnError {
    #[error("Expected an Integer, however {type_name} was given.")]
    InvalidType { type_name: String },

    #[error(
        "Invalid ISBN number size. Should be {min} or {max} digits long, but {actual} digits were provided."
    )]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Invalid digits in {field}: {value:?}")]
    InvalidDigits { field: String, value: String },

    #[error("Check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch { expected: u8, found: u8 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Length,
    Digits,
    CheckDigitMismatch,
    Config,
}

impl IsbnError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IsbnError::InvalidType { .. } => ErrorKind::Type,
            IsbnError::InvalidLength { .. } => ErrorKind::Length,
            IsbnError::InvalidDigits { .. } => ErrorKind::Digits,
            IsbnError::CheckDigitMismatch { .. } => ErrorKind::CheckDigitMismatch,
            IsbnError::IoError(_) | IsbnError::ConfigError { .. } => ErrorKind::Config,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            IsbnError::InvalidType { type_name } => {
                format!("ISBN must be given as a whole number, not {}", type_name)
            }
            IsbnError::InvalidLength { actual, .. } => {
                format!("ISBN has {} digits; expected 12 or 13", actual)
            }
            IsbnError::InvalidDigits { value, .. } => {
                format!("'{}' is not a plain digit string", value)
            }
            IsbnError::CheckDigitMismatch { expected, found } => format!(
                "ISBN check digit {} is wrong, it should be {}",
                found, expected
            ),
            IsbnError::IoError(e) => format!("Could not read configuration: {}", e),
            IsbnError::ConfigError { message } => format!("Invalid configuration: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Type => "Pass the ISBN as an unsigned integer",
            ErrorKind::Length => "Provide the 12-digit body, optionally followed by its check digit",
            ErrorKind::Digits => "Remove hyphens, spaces and other non-digit characters",
            ErrorKind::CheckDigitMismatch => {
                "Re-check the source of the ISBN or disable strict_check_digit"
            }
            ErrorKind::Config => "Check that the configuration file exists and is valid TOML",
        }
    }
}

pub type Result<T> = std::result::Result<T, IsbnError>;
