//! Configuration handling for the lead form

use crate::sink::DEFAULT_ENDPOINT;
use crate::state::tracking::DEFAULT_TRACKING_BASE_URL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the sink endpoint
pub const ENDPOINT_ENV: &str = "LEAD_FORM_ENDPOINT";
/// Environment override for the landing URL carrying UTM parameters
pub const LANDING_URL_ENV: &str = "LEAD_FORM_LANDING_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the lead form
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LeadConfig {
    /// Lead sink URL
    pub endpoint: Option<String>,
    /// Base of the tracking URL attached to each lead
    pub tracking_base_url: Option<String>,
    /// Landing page URL or query string with the campaign parameters
    pub landing_url: Option<String>,
    /// Transport timeout for the sink request
    pub timeout_secs: Option<u64>,
}

impl LeadConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "skylinescholar", "lead-form-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file, next to the application's local data
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("lead-form.log"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(
            std::env::var(ENDPOINT_ENV).ok(),
            std::env::var(LANDING_URL_ENV).ok(),
        );
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: LeadConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    fn apply_overrides(&mut self, endpoint: Option<String>, landing_url: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
            self.endpoint = Some(endpoint);
        }
        if let Some(landing_url) = landing_url.filter(|l| !l.is_empty()) {
            self.landing_url = Some(landing_url);
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn tracking_base_url(&self) -> &str {
        self.tracking_base_url
            .as_deref()
            .unwrap_or(DEFAULT_TRACKING_BASE_URL)
    }

    pub fn landing_url(&self) -> &str {
        self.landing_url.as_deref().unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = LeadConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.tracking_base_url.is_none());
        assert!(config.landing_url.is_none());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_defaults_through_accessors() {
        let config = LeadConfig::default();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.tracking_base_url(), "https://skylinescholar.com/");
        assert_eq!(config.landing_url(), "");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_serialization() {
        let config = LeadConfig {
            endpoint: Some("http://localhost:8080/exec".to_string()),
            tracking_base_url: Some("https://example.com/".to_string()),
            landing_url: Some("https://example.com/?utm_source=ads".to_string()),
            timeout_secs: Some(5),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: LeadConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
        assert_eq!(parsed.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: LeadConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, LeadConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "http://sink/exec", "unknown_field": "value"}"#;
        let parsed: LeadConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint(), "http://sink/exec");
    }

    #[test]
    fn test_env_overrides_replace_file_values() {
        let mut config = LeadConfig {
            endpoint: Some("http://file/exec".to_string()),
            ..Default::default()
        };
        config.apply_overrides(
            Some("http://env/exec".to_string()),
            Some("?utm_source=env".to_string()),
        );
        assert_eq!(config.endpoint(), "http://env/exec");
        assert_eq!(config.landing_url(), "?utm_source=env");
    }

    #[test]
    fn test_empty_env_overrides_are_ignored() {
        let mut config = LeadConfig {
            endpoint: Some("http://file/exec".to_string()),
            ..Default::default()
        };
        config.apply_overrides(Some(String::new()), None);
        assert_eq!(config.endpoint(), "http://file/exec");
        assert!(config.landing_url.is_none());
    }

    #[test]
    fn test_log_path_is_inside_data_dir() {
        if let Some(path) = LeadConfig::log_path() {
            assert!(path.ends_with("lead-form.log"));
        }
    }
}
