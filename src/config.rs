//! Process-wide relay configuration.
//!
//! Built once at startup from the environment and passed into the handlers
//! via [`crate::server::AppState`]; business logic never reads the ambient
//! environment directly, so tests can construct fake configurations.

use std::time::Duration;

/// Default HTTP listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 4000;

/// OpenRouter model used for every completion request.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";

/// OpenRouter API base URL.
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// `HTTP-Referer` attribution header sent to OpenRouter.
pub const REFERER: &str = "https://zapagent-ai-builder.lovable.app";

/// `X-Title` attribution header sent to OpenRouter.
pub const APP_TITLE: &str = "ZapAgent Gerador Profissional";

/// Outbound request timeout. Requests fail fast with 504 instead of hanging.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Immutable relay configuration.
///
/// The API key is optional at startup: its absence degrades completion
/// requests to a 500 response but never prevents the process from serving
/// the liveness route.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// OpenRouter bearer credential, from `OPENROUTER_API_KEY`.
    pub api_key: Option<String>,
    /// HTTP listen port, from `PORT`.
    pub port: u16,
    /// Completion model identifier.
    pub model: String,
    /// Completion API base URL.
    pub base_url: String,
    /// Attribution referer header value.
    pub referer: String,
    /// Attribution title header value.
    pub title: String,
    /// Outbound request timeout.
    pub timeout: Duration,
}

impl RelayConfig {
    /// Build a configuration with defaults and the given credential.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            port: DEFAULT_PORT,
            model: DEFAULT_MODEL.to_string(),
            base_url: OPENROUTER_BASE_URL.to_string(),
            referer: REFERER.to_string(),
            title: APP_TITLE.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Load configuration from the environment.
    ///
    /// `OPENROUTER_API_KEY` is the credential; `PORT` overrides the listen
    /// port. An unparseable `PORT` falls back to the default.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENROUTER_API_KEY").ok();
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let mut config = Self::new(api_key);
        config.port = port;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let config = RelayConfig::new(Some("sk-test".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.port, 4000);
        assert_eq!(config.model, "deepseek/deepseek-r1:free");
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_missing_key_is_allowed() {
        let config = RelayConfig::new(None);
        assert!(config.api_key.is_none());
    }
}
