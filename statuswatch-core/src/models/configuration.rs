//! Configuration data structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default status API endpoint queried every cycle.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default seconds between poll cycles.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Environment variable holding the status API token.
pub const API_TOKEN_VAR: &str = "STATUS_API_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable holding the Telegram recipient chat id.
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Logging level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub enum LogLevel {
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "info")]
    #[default]
    Info,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "trace")]
    Trace,
}

/// Errors that can occur while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Main configuration structure. Loaded once at startup, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Status API endpoint queried every cycle
    pub endpoint: String,
    /// Seconds to sleep between poll cycles
    pub poll_interval_seconds: u64,
    /// Logging verbosity level
    pub log_level: LogLevel,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval_seconds: DEFAULT_POLL_INTERVAL_SECS,
            log_level: LogLevel::Info,
        }
    }
}

impl Configuration {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigurationError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Configuration = toml::from_str(&content)?;
            Ok(config)
        } else {
            // Return default configuration if file doesn't exist
            Ok(Configuration::default())
        }
    }

    /// Get the XDG config directory path
    pub fn default_config_path() -> Result<PathBuf, ConfigurationError> {
        let config_dir = dirs::config_dir().ok_or(ConfigurationError::NoConfigDir)?;
        Ok(config_dir.join("statuswatch").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            errors.push("endpoint must be an http(s) URL".to_string());
        }

        if self.poll_interval_seconds == 0 {
            errors.push("poll_interval_seconds must be at least 1".to_string());
        }

        if self.poll_interval_seconds > 86_400 {
            errors.push("poll_interval_seconds cannot exceed 86400 (1 day)".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Errors that can occur while reading credentials from the environment
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("missing required environment variables: {0}")]
    Missing(String),
}

/// Secrets read from the environment once at startup. Intentionally not
/// `Debug`: tokens must never end up in logs.
#[derive(Clone)]
pub struct Credentials {
    /// Status API authorization token
    pub api_token: String,
    /// Telegram bot token
    pub bot_token: String,
    /// Telegram recipient chat id
    pub chat_id: String,
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

impl Credentials {
    /// Read all three credentials, collecting every missing variable into one
    /// error so the operator sees the full list at once.
    pub fn from_env() -> Result<Self, CredentialsError> {
        let api_token = read_var(API_TOKEN_VAR);
        let bot_token = read_var(BOT_TOKEN_VAR);
        let chat_id = read_var(CHAT_ID_VAR);

        match (api_token, bot_token, chat_id) {
            (Some(api_token), Some(bot_token), Some(chat_id)) => Ok(Self {
                api_token,
                bot_token,
                chat_id,
            }),
            (api_token, bot_token, chat_id) => {
                let mut missing = Vec::new();
                if api_token.is_none() {
                    missing.push(API_TOKEN_VAR);
                }
                if bot_token.is_none() {
                    missing.push(BOT_TOKEN_VAR);
                }
                if chat_id.is_none() {
                    missing.push(CHAT_ID_VAR);
                }
                Err(CredentialsError::Missing(missing.join(", ")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.poll_interval_seconds, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_configuration_validation() {
        let config = Configuration {
            endpoint: "ftp://wrong".to_string(),
            poll_interval_seconds: 0,
            ..Configuration::default()
        };

        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("endpoint")));
        assert!(errors.iter().any(|e| e.contains("poll_interval_seconds")));

        let config = Configuration {
            poll_interval_seconds: 100_000,
            ..Configuration::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("86400")));
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        let config = Configuration::load_from_file(&config_path).unwrap();
        assert_eq!(config.poll_interval_seconds, 600);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "poll_interval_seconds = 60\n").unwrap();

        let config = Configuration::load_from_file(&config_path).unwrap();
        assert_eq!(config.poll_interval_seconds, 60);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "poll_interval_seconds = \"soon\"\n").unwrap();

        let error = Configuration::load_from_file(&config_path).unwrap_err();
        assert!(matches!(error, ConfigurationError::Parse(_)));
    }

    // Environment mutation is process-wide, so the ok and error paths share
    // one test instead of racing each other.
    #[test]
    fn test_credentials_from_env() {
        std::env::set_var(API_TOKEN_VAR, "api");
        std::env::set_var(BOT_TOKEN_VAR, "bot");
        std::env::set_var(CHAT_ID_VAR, "chat");

        let credentials = Credentials::from_env().unwrap();
        assert_eq!(credentials.api_token, "api");
        assert_eq!(credentials.bot_token, "bot");
        assert_eq!(credentials.chat_id, "chat");

        std::env::remove_var(BOT_TOKEN_VAR);
        std::env::set_var(CHAT_ID_VAR, "");

        let error = match Credentials::from_env() {
            Ok(_) => panic!("expected missing-credentials error"),
            Err(error) => error,
        };
        let CredentialsError::Missing(missing) = error;
        assert!(missing.contains(BOT_TOKEN_VAR));
        assert!(missing.contains(CHAT_ID_VAR));
        assert!(!missing.contains(API_TOKEN_VAR));

        std::env::remove_var(API_TOKEN_VAR);
        std::env::remove_var(CHAT_ID_VAR);
    }
}
