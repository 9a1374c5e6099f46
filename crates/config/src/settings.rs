//! Main settings module

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use deskmate_core::PersonaId;

use crate::ConfigError;

/// Which matching algorithm the chat front end uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Scored trigger catalog with follow-up state
    #[default]
    Scored,
    /// Per-persona cascading rule chains
    Cascading,
}

impl std::str::FromStr for MatchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scored" => Ok(MatchMode::Scored),
            "cascading" => Ok(MatchMode::Cascading),
            other => Err(ConfigError::InvalidValue {
                field: "chat.mode".to_string(),
                message: format!("expected 'scored' or 'cascading', got '{}'", other),
            }),
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Chat front end configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_chat()?;
        Ok(())
    }

    fn validate_chat(&self) -> Result<(), ConfigError> {
        let chat = &self.chat;

        if chat.typing_ms_per_char > 200 {
            return Err(ConfigError::InvalidValue {
                field: "chat.typing_ms_per_char".to_string(),
                message: format!("Too slow (maximum 200ms), got {}", chat.typing_ms_per_char),
            });
        }

        if chat.typing_max_ms > 10_000 {
            return Err(ConfigError::InvalidValue {
                field: "chat.typing_max_ms".to_string(),
                message: format!("Too high (maximum 10000ms), got {}", chat.typing_max_ms),
            });
        }

        if chat.fallback_message.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "chat.fallback_message".to_string(),
                message: "Must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Chat front end configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Persona whose rule chain answers in cascading mode
    #[serde(default)]
    pub persona: PersonaId,

    /// Matching algorithm
    #[serde(default)]
    pub mode: MatchMode,

    /// Simulated typing delay per response character
    #[serde(default = "default_typing_ms_per_char")]
    pub typing_ms_per_char: u64,

    /// Cap on the simulated typing delay
    #[serde(default = "default_typing_max_ms")]
    pub typing_max_ms: u64,

    /// Pause between the reply and its widget
    #[serde(default = "default_widget_delay_ms")]
    pub widget_delay_ms: u64,

    /// Catalog file replacing the built-in scored catalog
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Shown when nothing matches
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

fn default_typing_ms_per_char() -> u64 {
    35
}
fn default_typing_max_ms() -> u64 {
    1500
}
fn default_widget_delay_ms() -> u64 {
    400
}
fn default_fallback_message() -> String {
    "I'm not sure I understood that. Try asking about:\n\
     - Team workload\n\
     - Agent performance\n\
     - SLA performance\n\
     - At-risk customers\n\
     - Customer sentiment\n\
     - Schedule a 1-on-1"
        .to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            persona: PersonaId::default(),
            mode: MatchMode::default(),
            typing_ms_per_char: default_typing_ms_per_char(),
            typing_max_ms: default_typing_max_ms(),
            widget_delay_ms: default_widget_delay_ms(),
            catalog_path: None,
            fallback_message: default_fallback_message(),
        }
    }
}

impl ChatConfig {
    /// Typing delay for a reply: per-character cost, capped
    pub fn typing_delay_ms(&self, response: &str) -> u64 {
        let chars = response.chars().count() as u64;
        chars
            .saturating_mul(self.typing_ms_per_char)
            .min(self.typing_max_ms)
    }
}

/// Load settings from `config/` and the environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (DESKMATE prefix, `__` separator)
/// 2. config/{env}.{yaml,toml,json} (if env specified)
/// 3. config/default.{yaml,toml,json}
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from("config", env)
}

/// Same as [`load_settings`] with an explicit config directory
pub fn load_settings_from(dir: impl AsRef<Path>, env: Option<&str>) -> Result<Settings, ConfigError> {
    let dir = dir.as_ref();
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false));

    if let Some(env_name) = env {
        builder = builder.add_source(File::with_name(&dir.join(env_name).to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("DESKMATE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        dir = %dir.display(),
        env = env.unwrap_or("default"),
        "Settings loaded"
    );

    Ok(settings)
}
