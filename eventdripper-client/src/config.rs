//! Configuration for the EventDripper client

use crate::ClientError;
use std::time::Duration;

/// Production API host
pub const DEFAULT_HOST: &str = "https://api.production.event-dripper.haps.pw";

/// Configuration for the client
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent in the `Authorization` header
    pub api_key: String,

    /// Base URL of the service
    pub host: String,

    /// Timeout for each request
    pub timeout: Duration,

    /// User-Agent header for outgoing requests
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the production host
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("EventDripper-Rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a builder for custom configuration
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(api_key)
    }

    /// Create configuration from environment variables.
    ///
    /// Uses the following environment variables:
    /// - `EVENTDRIPPER_API_KEY`: Required API key
    /// - `EVENTDRIPPER_HOST`: Service host (default: production)
    /// - `EVENTDRIPPER_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var("EVENTDRIPPER_API_KEY")
            .map_err(|_| ClientError::ConfigError("EVENTDRIPPER_API_KEY not set".into()))?;

        let mut config = Self::new(api_key);

        if let Ok(host) = std::env::var("EVENTDRIPPER_HOST")
            && !host.is_empty()
        {
            config.host = host;
        }

        if let Ok(timeout) = std::env::var("EVENTDRIPPER_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(timeout.parse().map_err(|_| {
                ClientError::ConfigError("Invalid EVENTDRIPPER_TIMEOUT_SECS".into())
            })?);
        }

        Ok(config)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for ClientConfig
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder with default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(api_key),
        }
    }

    /// Set the service host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new("key");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("EventDripper-Rust/"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder("key")
            .host("http://localhost:8080")
            .timeout_secs(5)
            .user_agent("test-agent")
            .build();

        assert_eq!(config.host, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("very-secret-key");
        assert!(!format!("{:?}", config).contains("very-secret-key"));
    }
}
