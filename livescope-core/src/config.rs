//! Client settings.
//!
//! A [`Config`] is built once, then shared read-only between clients as an
//! `Arc<Config>`. Nothing is validated here: a malformed `api_root` only
//! surfaces when a request URI is built from it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_ROOT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    api_root: String,
    user_agent: String,
    /// `None` disables the request timeout.
    timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn new(api_root: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into(),
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    /// Load settings from a JSON document. Keys that are absent keep their
    /// default value.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout_secs = None;
        self
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_root(), "https://api.twitch.tv/kraken/");
        assert_eq!(config.user_agent(), "livestreamer-scope 0.1; (foo)");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_builders() {
        let config = Config::new("http://127.0.0.1:8080/", "tests/1.0")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_root(), "http://127.0.0.1:8080/");
        assert_eq!(config.user_agent(), "tests/1.0");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));

        assert_eq!(config.without_timeout().timeout(), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json_str(r#"{"user_agent": "custom/2.0"}"#).unwrap();
        assert_eq!(config.api_root(), DEFAULT_API_ROOT);
        assert_eq!(config.user_agent(), "custom/2.0");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));

        let config = Config::from_json_str(r#"{"timeout_secs": null}"#).unwrap();
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = Config::from_json_str("api_root = 1").unwrap_err();
        assert!(matches!(err, crate::Error::Decode(_)));
    }
}
