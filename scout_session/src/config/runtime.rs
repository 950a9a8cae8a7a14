// RUNTIME PREFERENCES (User Experience)

use crate::grammar::StarTypePolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Runtime configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn error_code(&self) -> crate::logging::Code {
        crate::logging::codes::system::CONFIG_LOAD_FAILURE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangePreferences {
    /// Directory holding the dashboard folder (platform specific in deployments)
    pub data_root: PathBuf,

    /// Folder with session documents shipped alongside the game
    pub bundled_sessions_dir: Option<PathBuf>,

    /// Display geometry used for the reference layout in result documents
    pub screen_width: f32,
    pub screen_height: f32,

    /// How star object type codes outside 0..=3 are treated
    pub star_type_policy: StarTypePolicy,
}

impl Default for ExchangePreferences {
    fn default() -> Self {
        Self {
            data_root: env::var(env_vars::DATA_ROOT)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            bundled_sessions_dir: env::var(env_vars::BUNDLED_SESSIONS).ok().map(PathBuf::from),
            screen_width: env::var(env_vars::SCREEN_WIDTH)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024.0),
            screen_height: env::var(env_vars::SCREEN_HEIGHT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(768.0),
            star_type_policy: env::var(env_vars::STAR_TYPE_POLICY)
                .ok()
                .and_then(|v| parse_star_type_policy(&v))
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,

    /// Whether to tag events with the session document being processed
    pub include_document_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
            include_document_context: env::var(env_vars::LOGGING_INCLUDE_DOCUMENT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

fn parse_star_type_policy(value: &str) -> Option<StarTypePolicy> {
    match value.to_lowercase().as_str() {
        "permissive" => Some(StarTypePolicy::Permissive),
        "strict" => Some(StarTypePolicy::Strict),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub exchange: ExchangePreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Load from a TOML file. Missing keys keep their environment defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Exchange
    pub const DATA_ROOT: &str = "SCOUT_DATA_ROOT";
    pub const BUNDLED_SESSIONS: &str = "SCOUT_BUNDLED_SESSIONS";
    pub const SCREEN_WIDTH: &str = "SCOUT_SCREEN_WIDTH";
    pub const SCREEN_HEIGHT: &str = "SCOUT_SCREEN_HEIGHT";
    pub const STAR_TYPE_POLICY: &str = "SCOUT_STAR_TYPE_POLICY";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "SCOUT_LOGGING_USE_STRUCTURED";
    pub const LOGGING_MIN_LEVEL: &str = "SCOUT_LOGGING_MIN_LEVEL";
    pub const LOGGING_INCLUDE_DOCUMENT: &str = "SCOUT_LOGGING_INCLUDE_DOCUMENT";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("1"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_star_policy_parsing() {
        assert_eq!(parse_star_type_policy("Strict"), Some(StarTypePolicy::Strict));
        assert_eq!(
            parse_star_type_policy("permissive"),
            Some(StarTypePolicy::Permissive)
        );
        assert_eq!(parse_star_type_policy("lenient"), None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [exchange]
            screen_width = 1920.0
            star_type_policy = "strict"

            [logging]
            min_log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.exchange.screen_width, 1920.0);
        assert_eq!(config.exchange.star_type_policy, StarTypePolicy::Strict);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
    }

    #[test]
    fn test_toml_file_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            RuntimeConfig::from_toml_file(&missing),
            Err(ConfigError::Io { .. })
        ));

        let broken = dir.path().join("broken.toml");
        let mut file = std::fs::File::create(&broken).unwrap();
        writeln!(file, "[exchange\nscreen_width = ").unwrap();
        assert!(matches!(
            RuntimeConfig::from_toml_file(&broken),
            Err(ConfigError::Parse { .. })
        ));
    }
}
