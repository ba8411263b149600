use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use shared::api::{feedback_url, server_error};
use shared::{ApiError, FeedbackApi, FeedbackDraft, FeedbackRecord};

use crate::services::config::AppConfig;

/// API client for the feedback backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    pub fn feedback_url(&self) -> String {
        feedback_url(&self.base_url)
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        server_error(status, &body)
    }
}

#[async_trait(?Send)]
impl FeedbackApi for ApiClient {
    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, ApiError> {
        let response = Request::get(&self.feedback_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<Vec<FeedbackRecord>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn submit_feedback(&self, draft: &FeedbackDraft) -> Result<(), ApiError> {
        // json() sets Content-Type: application/json
        let response = Request::post(&self.feedback_url())
            .json(draft)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
