//! Configuration for the theme controller.
//!
//! Every field has a default matching the page markup the controller was
//! written for, so an empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Log level setting for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Storage key the preference is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Root element attribute that reflects the active theme.
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";

/// Id of the toggle control in the page markup.
pub const DEFAULT_CONTROL_ID: &str = "themeToggle";

/// Controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Version of the configuration format
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_attribute")]
    pub attribute: String,

    #[serde(default = "default_control_id")]
    pub control_id: String,

    /// Theme applied when nothing is persisted
    #[serde(default)]
    pub default_theme: Theme,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_attribute() -> String {
    DEFAULT_ATTRIBUTE.to_string()
}

fn default_control_id() -> String {
    DEFAULT_CONTROL_ID.to_string()
}

impl ThemeConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            storage_key: default_storage_key(),
            attribute: default_attribute(),
            control_id: default_control_id(),
            default_theme: Theme::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },
}
