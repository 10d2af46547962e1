use crate::domain::model::TimeFormat;
use crate::utils::error::{Result, UtilError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_time_format(field_name: &str, pattern: &str) -> Result<TimeFormat> {
    validate_non_empty_string(field_name, pattern)?;

    TimeFormat::new(pattern).map_err(|e| match e {
        UtilError::TimeFormatError { format, reason } => UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format,
            reason,
        },
        other => other,
    })
}
