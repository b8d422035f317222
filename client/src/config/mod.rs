mod config;
mod display_config;
mod logging_config;

pub use config::{Config, get_config_manager, get_config_path};
pub use display_config::{DisplayConfig, MIN_SCREEN_WIDTH};
pub use logging_config::LoggingConfig;
