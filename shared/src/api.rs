use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{ApiErrorBody, FeedbackDraft, FeedbackRecord};

/// Path of the feedback collection on the API
pub const FEEDBACK_PATH: &str = "/feedback";

/// Join an API base URL and the feedback path, tolerating a trailing slash
pub fn feedback_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), FEEDBACK_PATH)
}

/// Build the error for a non-2xx response. Prefers the `{"error": ..}` payload,
/// then the raw body text.
pub fn server_error(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(payload) => payload.error,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => "Unknown error".to_string(),
    };
    ApiError::Server { status, message }
}

/// The two calls the feedback form makes against the backend.
///
/// Futures are not `Send`: in the browser they run on the single JS event loop.
#[async_trait(?Send)]
pub trait FeedbackApi {
    /// `GET /feedback`
    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, ApiError>;

    /// `POST /feedback` with the draft as JSON body
    async fn submit_feedback(&self, draft: &FeedbackDraft) -> Result<(), ApiError>;
}
