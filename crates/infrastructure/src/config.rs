//! Application configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Application environment (development or production)
///
/// Controls whether internal error details reach API responses by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - error details are exposed
    #[default]
    Development,
    /// Production environment - internal error details are hidden
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Structured JSON lines
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "application=debug" (RUST_LOG wins)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Error rendering configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorsConfig {
    /// Include internal error details in responses
    ///
    /// Unset means: expose in development, hide in production.
    #[serde(default)]
    pub expose_internal_errors: Option<bool>,
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Error rendering configuration
    #[serde(default)]
    pub errors: ErrorsConfig,
}

impl AppConfig {
    /// Load configuration from `errmap.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (if given) and the environment
    ///
    /// Environment variables use the `ERRMAP` prefix with `__` as separator,
    /// e.g. `ERRMAP_LOGGING__FORMAT=json`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("errmap").required(false),
        };

        let builder = config::Config::builder()
            .set_default("logging.level", default_log_level())?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("ERRMAP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Whether internal error details should be exposed in responses
    #[must_use]
    pub fn expose_internal_errors(&self) -> bool {
        self.errors
            .expose_internal_errors
            .unwrap_or(self.environment == Environment::Development)
    }
}
