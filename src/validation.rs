use tracing::warn;
use validator::ValidateEmail;

use crate::{
    error::AppError,
    profile::{FIELD_DELIMITER, KEY_DELIMITER},
};

/// Usage line shown when no key is given
pub const USAGE: &str = "git-user <key>";

/// Validates a profile key before lookup
pub fn validate_key(key: &str) -> Result<(), AppError> {
    if key.is_empty() {
        Err(AppError::Usage(USAGE.to_string()))
    } else if key.contains(KEY_DELIMITER) || key.contains('\n') {
        Err(AppError::Validation(format!(
            "key cannot contain '{}' or line breaks",
            KEY_DELIMITER
        )))
    } else {
        Ok(())
    }
}

/// Validates a value that will be stored as a profile field
fn validate_field(label: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        Err(AppError::Validation(
            "both name and email are required".to_string(),
        ))
    } else if value.contains(FIELD_DELIMITER) || value.contains('\n') {
        Err(AppError::Validation(format!(
            "{} cannot contain '{}' or line breaks",
            label, FIELD_DELIMITER
        )))
    } else {
        Ok(())
    }
}

/// Validates username input
pub fn validate_input_username(name: &str) -> Result<(), AppError> {
    validate_field("name", name)
}

/// Validates email input
///
/// The store has no schema, so an address that does not look like an email
/// is accepted with a warning.
pub fn validate_input_email(email: &str) -> Result<(), AppError> {
    validate_field("email", email)?;
    if !email.validate_email() {
        warn!(email, "email does not look like an address");
    }
    Ok(())
}
