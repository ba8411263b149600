use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownFieldError;

/// Banner text shown after the API accepts a submission
pub const SUCCESS_MESSAGE: &str = "Thank you! Your feedback has been submitted successfully.";

/// Blocking alert text shown for any failed submission
pub const FAILURE_ALERT_MESSAGE: &str = "Error submitting feedback";

/// How long the success banner stays visible
pub const SUCCESS_MESSAGE_DURATION_MS: u32 = 3000;

/// One of the three inputs on the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackField {
    Name,
    Email,
    Message,
}

impl FeedbackField {
    /// All fields in form order
    pub const ALL: [FeedbackField; 3] = [FeedbackField::Name, FeedbackField::Email, FeedbackField::Message];

    /// Name used for the input element and the JSON key
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackField::Name => "name",
            FeedbackField::Email => "email",
            FeedbackField::Message => "message",
        }
    }
}

impl fmt::Display for FeedbackField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FeedbackField::Name),
            "email" => Ok(FeedbackField::Email),
            "message" => Ok(FeedbackField::Message),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

/// In-progress form values. Also the POST body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FeedbackDraft {
    pub fn get(&self, field: FeedbackField) -> &str {
        match field {
            FeedbackField::Name => &self.name,
            FeedbackField::Email => &self.email,
            FeedbackField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FeedbackField, value: String) {
        match field {
            FeedbackField::Name => self.name = value,
            FeedbackField::Email => self.email = value,
            FeedbackField::Message => self.message = value,
        }
    }

    /// True if any field is the empty string. Whitespace counts as content here;
    /// the validator is what rejects blank input.
    pub fn has_empty_field(&self) -> bool {
        FeedbackField::ALL.iter().any(|field| self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A persisted feedback entry as returned by `GET /feedback`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    /// ISO 8601 / RFC 3339 timestamp assigned by the server
    pub timestamp: String,
}

impl FeedbackRecord {
    /// Timestamp rendered in the viewer's local time zone
    pub fn display_timestamp(&self) -> String {
        crate::format::format_timestamp(&self.timestamp)
    }
}

/// Error payload returned by the API on a non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// User-facing texts and timings for the feedback form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackFormConfig {
    pub success_message: String,
    pub failure_alert: String,
    pub success_message_duration_ms: u32,
}

impl Default for FeedbackFormConfig {
    fn default() -> Self {
        Self {
            success_message: SUCCESS_MESSAGE.to_string(),
            failure_alert: FAILURE_ALERT_MESSAGE.to_string(),
            success_message_duration_ms: SUCCESS_MESSAGE_DURATION_MS,
        }
    }
}
