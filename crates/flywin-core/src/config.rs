//! Runtime configuration for the audit service.

use std::time::Duration;

use crate::error::{FlywinError, FlywinResult};

/// Default Anthropic API base URL.
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com";

/// Default model used for audits.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default output token ceiling for one audit.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default timeout for the outbound model request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable holding the Anthropic credential.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Settings for talking to the Claude Messages API.
#[derive(Clone)]
pub struct AuditConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl std::fmt::Debug for AuditConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AuditConfig {
    /// Create a config with default model settings for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Check that the settings can produce a usable request.
    pub fn validate(&self) -> FlywinResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(FlywinError::config(format!("{} must not be empty", API_KEY_ENV)));
        }
        if self.model.trim().is_empty() {
            return Err(FlywinError::config("model name must not be empty"));
        }
        if self.max_tokens == 0 {
            return Err(FlywinError::config("max_tokens must be greater than zero"));
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(FlywinError::config(format!(
                "api url must start with http:// or https:// (got '{}')",
                self.api_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AuditConfig::new("sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_key() {
        let config = AuditConfig::new("   ");
        assert!(matches!(config.validate(), Err(FlywinError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_tokens() {
        let mut config = AuditConfig::new("sk-test");
        config.max_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_url() {
        let mut config = AuditConfig::new("sk-test");
        config.api_url = "api.anthropic.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = AuditConfig::new("sk-secret-value");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret-value"));
        assert!(printed.contains("<redacted>"));
    }
}
