//! Configuration resolved from the environment.

use crate::gateway::DEFAULT_MODEL;

/// Runtime configuration for gateways and the relay.
///
/// A missing API key never prevents startup; every backend call simply
/// fails upstream with an auth error until one is provided.
#[derive(Debug, Clone)]
pub struct VellumConfig {
    /// Anthropic API credential (`ANTHROPIC_API_KEY`).
    pub api_key: Option<String>,
    /// Backend base URL override (`ANTHROPIC_BASE_URL`).
    pub base_url: Option<String>,
    /// Model id (`VELLUM_MODEL`).
    pub model: String,
    /// Relay endpoint for clients going through `/api/chat` (`VELLUM_RELAY_URL`).
    pub relay_url: Option<String>,
}

impl Default for VellumConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            relay_url: None,
        }
    }
}

impl VellumConfig {
    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignore a missing .env
        Self {
            api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            base_url: std::env::var("ANTHROPIC_BASE_URL").ok(),
            model: std::env::var("VELLUM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            relay_url: std::env::var("VELLUM_RELAY_URL").ok(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_default_model() {
        let config = VellumConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(!config.has_credentials());
    }

    #[test]
    fn empty_key_counts_as_no_credentials() {
        let config = VellumConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_credentials());
    }
}
