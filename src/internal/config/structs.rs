pub mod client_config;
pub mod config_error;

pub use client_config::ClientConfig;
pub use config_error::ConfigError;
