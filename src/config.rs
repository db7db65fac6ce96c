//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that supplies the form relay access key
pub const ACCESS_KEY_ENV: &str = "WEB3FORMS_ACCESS_KEY";

/// Default outbound request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortfolioConfig {
    /// Web3Forms access key (the environment variable takes priority)
    pub access_key: Option<String>,
    /// Override for the relay endpoint (self-hosted relays, tests)
    pub relay_endpoint: Option<String>,
    /// Outbound request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Skip the splash animation on startup
    pub skip_splash: Option<bool>,
}

impl PortfolioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "github", "portfolio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = Self::load_file()?;
        Ok(config.with_env_key(std::env::var(ACCESS_KEY_ENV).ok()))
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PortfolioConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Apply an environment-supplied access key over the file value.
    ///
    /// Kept separate from `load` so the resolution order is testable
    /// without mutating the process environment.
    pub fn with_env_key(mut self, env_key: Option<String>) -> Self {
        if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
            self.access_key = Some(key);
        }
        self
    }

    /// The access key, if a non-empty one is configured
    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Whether a usable access key is configured
    pub fn has_access_key(&self) -> bool {
        self.access_key().is_some()
    }

    /// Outbound request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Whether to skip the splash animation
    pub fn skip_splash(&self) -> bool {
        self.skip_splash.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortfolioConfig::default();
        assert!(config.access_key.is_none());
        assert!(config.relay_endpoint.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.skip_splash.is_none());
        assert!(!config.has_access_key());
    }

    #[test]
    fn test_env_key_overrides_file_key() {
        let config = PortfolioConfig {
            access_key: Some("file-key".to_string()),
            ..Default::default()
        };
        let resolved = config.with_env_key(Some("env-key".to_string()));
        assert_eq!(resolved.access_key(), Some("env-key"));
    }

    #[test]
    fn test_missing_env_key_keeps_file_key() {
        let config = PortfolioConfig {
            access_key: Some("file-key".to_string()),
            ..Default::default()
        };
        let resolved = config.with_env_key(None);
        assert_eq!(resolved.access_key(), Some("file-key"));
    }

    #[test]
    fn test_blank_env_key_is_ignored() {
        let config = PortfolioConfig::default();
        let resolved = config.with_env_key(Some("   ".to_string()));
        assert!(!resolved.has_access_key());
    }

    #[test]
    fn test_blank_file_key_counts_as_missing() {
        let config = PortfolioConfig {
            access_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_access_key());
        assert!(config.access_key().is_none());
    }

    #[test]
    fn test_request_timeout_defaults_to_ten_seconds() {
        let config = PortfolioConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_request_timeout_respects_override() {
        let config = PortfolioConfig {
            request_timeout_secs: Some(3),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = PortfolioConfig {
            access_key: Some("abc123".to_string()),
            relay_endpoint: Some("https://relay.example/submit".to_string()),
            request_timeout_secs: Some(5),
            skip_splash: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PortfolioConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.access_key, Some("abc123".to_string()));
        assert_eq!(
            parsed.relay_endpoint,
            Some("https://relay.example/submit".to_string())
        );
        assert_eq!(parsed.request_timeout_secs, Some(5));
        assert_eq!(parsed.skip_splash, Some(true));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: PortfolioConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.access_key.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"access_key": "abc", "unknown_field": "value"}"#;
        let parsed: PortfolioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_key, Some("abc".to_string()));
    }
}
