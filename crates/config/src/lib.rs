//! Configuration management for deskmate
//!
//! Supports loading configuration from:
//! - YAML/TOML/JSON files under `config/`
//! - Environment variables (DESKMATE_ prefix, `__` separator)
//! - Conversation catalog files (entries plus follow-up offers)

pub mod catalog;
pub mod settings;

pub use catalog::CatalogFile;
pub use settings::{
    load_settings, load_settings_from, ChatConfig, MatchMode, ObservabilityConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
