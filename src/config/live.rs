//! Live Cricbuzz API configuration

use std::fmt;

use crate::error::{LiveError, Result};

/// RapidAPI host the live endpoints are served from.
pub const DEFAULT_API_HOST: &str = "cricbuzz-cricket.p.rapidapi.com";

/// Bounded wait for any single live request, in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Settings for the live data client.
///
/// The API key comes from `RAPIDAPI_KEY` and is required: live views are
/// useless without it, so construction fails early rather than issuing
/// doomed requests. The key is redacted from `Debug` output.
#[derive(Clone)]
pub struct LiveApiConfig {
    /// RapidAPI host, also sent as the `x-rapidapi-host` header.
    pub api_host: String,
    /// RapidAPI key, sent as the `x-rapidapi-key` header.
    pub api_key: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl fmt::Debug for LiveApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveApiConfig")
            .field("api_host", &self.api_host)
            .field("api_key", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl LiveApiConfig {
    /// Build a config with the default host and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            api_key: api_key.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Load the key from `RAPIDAPI_KEY` (required) and an optional host
    /// override from `RAPIDAPI_HOST`.
    pub fn from_env() -> Result<Self> {
        let api_key = match std::env::var("RAPIDAPI_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => return Err(LiveError::MissingApiKey.into()),
        };
        let mut config = Self::new(api_key);
        if let Ok(host) = std::env::var("RAPIDAPI_HOST") {
            if !host.trim().is_empty() {
                config.api_host = host;
            }
        }
        Ok(config)
    }

    /// Override the per-request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Base URL all endpoint paths are joined onto.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.api_host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StumpsError;

    #[test]
    fn test_new_uses_default_host_and_timeout() {
        let config = LiveApiConfig::new("k");
        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn test_base_url() {
        let config = LiveApiConfig::new("k");
        assert_eq!(
            config.base_url(),
            "https://cricbuzz-cricket.p.rapidapi.com"
        );
    }

    #[test]
    fn test_with_timeout_ms() {
        let config = LiveApiConfig::new("k").with_timeout_ms(2_500);
        assert_eq!(config.timeout_ms, 2_500);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = LiveApiConfig::new("super-secret-key");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_from_env_requires_a_non_blank_key() {
        // Env is process-global, so every scenario lives in one test.
        std::env::remove_var("RAPIDAPI_KEY");
        assert!(matches!(
            LiveApiConfig::from_env(),
            Err(StumpsError::Live(LiveError::MissingApiKey))
        ));

        std::env::set_var("RAPIDAPI_KEY", "   ");
        assert!(matches!(
            LiveApiConfig::from_env(),
            Err(StumpsError::Live(LiveError::MissingApiKey))
        ));

        std::env::set_var("RAPIDAPI_KEY", "a-working-key");
        let config = match LiveApiConfig::from_env() {
            Ok(config) => config,
            Err(e) => panic!("a non-blank key must build a config: {e}"),
        };
        assert_eq!(config.api_key, "a-working-key");

        std::env::remove_var("RAPIDAPI_KEY");
    }
}
