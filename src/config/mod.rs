//! Application configuration module
//!
//! Handles the YAML configuration file, environment overrides and
//! application-wide constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::{
    Config, DatabaseConfig, ExtensionConfig, RedisConfig, ServerConfig, SessionConfig,
    SwaggerConfig,
};
