use thiserror::Error;

/// Failure talking to the feedback API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// The response body could not be parsed
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The message to log for this error: the server's `error` text when there
    /// is one, otherwise the full description.
    pub fn log_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A DOM input reported a name that is not one of the form fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown feedback field: {0}")]
pub struct UnknownFieldError(pub String);
