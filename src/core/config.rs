//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::str::FromStr;

use tracing::Level;

const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Invalid value in an environment variable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum level for log output
    /// Example: LOG_LEVEL=debug
    pub log_level: Level,

    /// Whether responses are compressed (brotli / gzip)
    /// Example: COMPRESSION=false
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; unparsable ones are reported.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("LOG_LEVEL").ok().as_deref(),
            std::env::var("COMPRESSION").ok().as_deref(),
        )
    }

    /// Build configuration from raw variable values
    pub fn from_vars(
        log_level: Option<&str>,
        compression: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let log_level = match log_level {
            Some(value) => Level::from_str(value.trim()).map_err(|_| ConfigError::InvalidValue {
                var: "LOG_LEVEL",
                value: value.to_string(),
            })?,
            None => DEFAULT_LOG_LEVEL,
        };

        let compression = match compression {
            Some(value) => parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
                var: "COMPRESSION",
                value: value.to_string(),
            })?,
            None => true,
        };

        Ok(Self {
            log_level,
            compression,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            compression: true,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Parsing tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.compression);
    }

    #[test]
    fn test_log_level_parsing() {
        let config = Config::from_vars(Some("debug"), None).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);

        let config = Config::from_vars(Some(" WARN "), None).unwrap();
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Config::from_vars(Some("loud"), None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: "LOG_LEVEL",
                value: "loud".to_string()
            }
        );
        assert_eq!(err.to_string(), "LOG_LEVEL has invalid value 'loud'");
    }

    #[test]
    fn test_compression_parsing() {
        assert!(!Config::from_vars(None, Some("false")).unwrap().compression);
        assert!(!Config::from_vars(None, Some("0")).unwrap().compression);
        assert!(Config::from_vars(None, Some("Yes")).unwrap().compression);
        assert!(Config::from_vars(None, Some("maybe")).is_err());
    }
}
