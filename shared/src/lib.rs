pub mod api;
pub mod error;
pub mod form;
pub mod format;
pub mod loader;
pub mod models;
pub mod submission;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use api::FeedbackApi;
pub use error::{ApiError, UnknownFieldError};
pub use form::{ErrorMap, FeedbackForm};
pub use format::format_timestamp;
pub use loader::{FeedbackList, FetchTicket};
pub use models::{
    ApiErrorBody, FeedbackDraft, FeedbackField, FeedbackFormConfig, FeedbackRecord,
    FAILURE_ALERT_MESSAGE, SUCCESS_MESSAGE, SUCCESS_MESSAGE_DURATION_MS,
};
pub use submission::{SubmissionController, SubmissionOutcome, SubmissionPhase, SuccessBanner};
pub use validation::{validate, ValidationError};
