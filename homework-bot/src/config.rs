//! Bot configuration
//!
//! Defines the secrets and tunables of the bot. Values come from the process
//! environment (after an optional `.env` file has been loaded by `main`).

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default homework statuses endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "program.log";

const REQUIRED_VARIABLES: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Errors raised while loading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required secrets are absent or empty
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),

    /// A variable is set but cannot be used
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: String, reason: String },
}

impl ConfigError {
    fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Bot configuration
///
/// Built once at startup and handed to the poller; nothing reads the
/// environment after that.
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot access token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Homework statuses endpoint URL
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between two poll cycles
    pub retry_period: Duration,

    /// Upper bound for a single HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(
        practicum_token: impl Into<String>,
        telegram_token: impl Into<String>,
        telegram_chat_id: impl Into<String>,
    ) -> Self {
        Self {
            practicum_token: practicum_token.into(),
            telegram_token: telegram_token.into(),
            telegram_chat_id: telegram_chat_id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: homework_client::DEFAULT_API_URL.to_string(),
            retry_period: Duration::from_secs(600), // 10 minutes
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: Practicum homework statuses URL)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Empty values are treated as unset. All missing secrets are reported
    /// together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let missing: Vec<String> = REQUIRED_VARIABLES
            .into_iter()
            .filter(|name| get(*name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let mut config = Self::new(
            get("PRACTICUM_TOKEN").unwrap_or_default(),
            get("TELEGRAM_TOKEN").unwrap_or_default(),
            get("TELEGRAM_CHAT_ID").unwrap_or_default(),
        );

        if let Some(endpoint) = get("PRACTICUM_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(api_url) = get("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }
        if let Some(seconds) = get("RETRY_PERIOD") {
            config.retry_period = parse_seconds("RETRY_PERIOD", &seconds)?;
        }
        if let Some(seconds) = get("REQUEST_TIMEOUT") {
            config.request_timeout = parse_seconds("REQUEST_TIMEOUT", &seconds)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("PRACTICUM_ENDPOINT", &self.endpoint),
            ("TELEGRAM_API_URL", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::invalid(name, "must start with http:// or https://"));
            }
        }

        if self.retry_period.is_zero() {
            return Err(ConfigError::invalid("RETRY_PERIOD", "must be greater than 0"));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::invalid("REQUEST_TIMEOUT", "must be greater than 0"));
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Log file location from `LOG_FILE` (default: program.log)
///
/// Kept out of [`Config`]: logging has to be up before secrets are checked
/// so that a missing secret can be logged.
pub fn log_file_from_env() -> PathBuf {
    log_file_from_lookup(|name| std::env::var(name).ok())
}

/// Log file location from an arbitrary variable lookup
pub fn log_file_from_lookup<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup("LOG_FILE")
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

fn parse_seconds(name: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::invalid(name, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    const SECRETS: [(&str, &str); 3] = [
        ("PRACTICUM_TOKEN", "practicum"),
        ("TELEGRAM_TOKEN", "123:telegram"),
        ("TELEGRAM_CHAT_ID", "42"),
    ];

    #[test]
    fn test_default_config() {
        let config = Config::new("p", "t", "42");
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_with_secrets_only() {
        let config = Config::from_lookup(lookup(&SECRETS)).unwrap();
        assert_eq!(config.practicum_token, "practicum");
        assert_eq!(config.telegram_token, "123:telegram");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.telegram_api_url, "https://api.telegram.org");
    }

    #[test]
    fn test_from_lookup_reports_all_missing_secrets() {
        let err = Config::from_lookup(lookup(&[("TELEGRAM_TOKEN", "t")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVariables(vec![
                "PRACTICUM_TOKEN".to_string(),
                "TELEGRAM_CHAT_ID".to_string()
            ])
        );
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[
            ("PRACTICUM_TOKEN", "p"),
            ("TELEGRAM_TOKEN", "  "),
            ("TELEGRAM_CHAT_ID", "42"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVariables(vec!["TELEGRAM_TOKEN".to_string()])
        );
    }

    #[test]
    fn test_optional_overrides() {
        let mut vars = SECRETS.to_vec();
        vars.extend([
            ("PRACTICUM_ENDPOINT", "http://localhost:9000/statuses/"),
            ("RETRY_PERIOD", "60"),
            ("REQUEST_TIMEOUT", "5"),
        ]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/statuses/");
        assert_eq!(config.retry_period, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_log_file_location() {
        assert_eq!(log_file_from_lookup(lookup(&[])), PathBuf::from("program.log"));
        assert_eq!(
            log_file_from_lookup(lookup(&[("LOG_FILE", "")])),
            PathBuf::from("program.log")
        );
        assert_eq!(
            log_file_from_lookup(lookup(&[("LOG_FILE", "/tmp/bot.log")])),
            PathBuf::from("/tmp/bot.log")
        );
    }

    #[test]
    fn test_invalid_values() {
        let mut vars = SECRETS.to_vec();
        vars.push(("RETRY_PERIOD", "ten minutes"));
        assert!(matches!(
            Config::from_lookup(lookup(&vars)),
            Err(ConfigError::Invalid { ref name, .. }) if name == "RETRY_PERIOD"
        ));

        let mut vars = SECRETS.to_vec();
        vars.push(("RETRY_PERIOD", "0"));
        assert!(Config::from_lookup(lookup(&vars)).is_err());

        let mut vars = SECRETS.to_vec();
        vars.push(("PRACTICUM_ENDPOINT", "practicum.yandex.ru"));
        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let debug = format!("{:?}", Config::new("practicum-secret", "telegram-secret", "42"));
        assert!(!debug.contains("practicum-secret"));
        assert!(!debug.contains("telegram-secret"));
        assert!(debug.contains("42"));
    }
}
