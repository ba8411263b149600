use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::FeedbackField;

/// Shortest accepted feedback message, counted after trimming
pub const MIN_MESSAGE_LENGTH: usize = 10;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z]{2,4}$").expect("email pattern is valid")
});

/// Field-level validation failures. `Display` is the inline error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must only contain letters and spaces")]
    NameInvalidCharacters,
    #[error("Email is required")]
    EmailRequired,
    #[error("Enter a valid email address")]
    EmailInvalid,
    #[error("Feedback message cannot be empty")]
    MessageRequired,
    #[error("Feedback message should be at least 10 characters long")]
    MessageTooShort,
}

/// Check a single field value.
pub fn check(field: FeedbackField, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();

    match field {
        FeedbackField::Name => {
            if trimmed.is_empty() {
                Err(ValidationError::NameRequired)
            } else if !NAME_PATTERN.is_match(value) {
                Err(ValidationError::NameInvalidCharacters)
            } else {
                Ok(())
            }
        }
        FeedbackField::Email => {
            if trimmed.is_empty() {
                Err(ValidationError::EmailRequired)
            } else if !EMAIL_PATTERN.is_match(value) {
                Err(ValidationError::EmailInvalid)
            } else {
                Ok(())
            }
        }
        FeedbackField::Message => {
            if trimmed.is_empty() {
                Err(ValidationError::MessageRequired)
            } else if trimmed.chars().count() < MIN_MESSAGE_LENGTH {
                Err(ValidationError::MessageTooShort)
            } else {
                Ok(())
            }
        }
    }
}

/// Error text for `value` in `field`, or an empty string when it is valid.
pub fn validate(field: FeedbackField, value: &str) -> String {
    match check(field, value) {
        Ok(()) => String::new(),
        Err(error) => error.to_string(),
    }
}
