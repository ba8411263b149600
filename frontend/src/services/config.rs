use shared::FeedbackFormConfig;

/// Used when `FEEDBACK_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Startup configuration, built once in `main` and handed down as props
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub form: FeedbackFormConfig,
}

impl AppConfig {
    /// Read the API base URL baked in by the build (`FEEDBACK_API_URL=... trunk build`)
    pub fn from_build_env() -> Self {
        Self::from_api_url(option_env!("FEEDBACK_API_URL"))
    }

    pub fn from_api_url(api_base_url: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        Self {
            api_base_url,
            form: FeedbackFormConfig::default(),
        }
    }
}
