use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid range expression '{part}': {reason}")]
    RangeParseError { part: String, reason: String },

    #[error("Invalid time format '{format}': {reason}")]
    TimeFormatError { format: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl UtilError {
    pub(crate) fn range_parse(part: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        UtilError::RangeParseError {
            part: part.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;
