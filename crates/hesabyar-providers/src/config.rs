//! Settings for the Gemini client
//!
//! The client never reads ambient process state itself; whoever constructs
//! it supplies a [`GeminiSettings`], which makes the whole stack
//! constructible with a mock credential in tests.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Environment variable consulted when no explicit key is configured
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Default model when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default request timeout; the upstream service enforces none of its own
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Injected configuration for the Gemini client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// API key (falls back to the `GEMINI_API_KEY` environment variable)
    pub api_key: Option<String>,
    /// Base URL override (for self-hosted proxies and tests)
    pub base_url: Option<String>,
    /// Model id override
    pub model: Option<String>,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl GeminiSettings {
    /// Settings carrying an explicit API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Resolve the API key: explicit field first, then the environment
    pub fn resolve_api_key(&self) -> Result<String, ProviderError> {
        if let Some(key) = &self.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }

        if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
            if !key.is_empty() {
                return Ok(key);
            }
        }

        Err(ProviderError::ConfigError(format!(
            "API key not found; set {} or pass --api-key",
            API_KEY_ENV_VAR
        )))
    }

    /// Model id to use, defaulting to [`DEFAULT_MODEL`]
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Request timeout, defaulting to [`DEFAULT_TIMEOUT`]
    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}
