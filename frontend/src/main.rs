mod components;
mod hooks;
mod services;

use components::feedback_form::{FeedbackForm, FeedbackFormProps};
use services::config::AppConfig;

fn main() {
    services::logging::init();

    let config = AppConfig::from_build_env();
    log::info!("API URL: {}", config.api_base_url);

    yew::Renderer::<FeedbackForm>::with_props(FeedbackFormProps { config }).render();
}
