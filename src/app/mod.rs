mod app_config;
mod carbon_app;
mod carbon_app_error;
pub mod export;

pub use app_config::AppConfig;
pub use carbon_app::{CarbonApp, CarbonOperation};
pub use carbon_app_error::CarbonAppError;
