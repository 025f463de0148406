pub mod driven;
pub mod logging_config;

pub use logging_config::{ConfigError, LoggingConfig};
