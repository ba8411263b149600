pub mod alerts;
pub mod api;
pub mod config;
pub mod logging;
