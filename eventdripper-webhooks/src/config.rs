//! Configuration for webhook verification

use crate::{DEFAULT_TOLERANCE_SECS, WebhookError};

/// Environment variable holding the tolerance window in seconds
pub const TOLERANCE_ENV: &str = "EVENTDRIPPER_SIGNING_TOLERANCE_SECS";

/// Configuration for verifying incoming notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Maximum age of a signed timestamp (in seconds); `0` disables the check
    pub tolerance_secs: u64,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            tolerance_secs: DEFAULT_TOLERANCE_SECS,
        }
    }
}

impl VerifierConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> VerifierConfigBuilder {
        VerifierConfigBuilder::new()
    }

    /// Configuration that accepts signed timestamps of any age
    pub fn disabled_tolerance() -> Self {
        Self { tolerance_secs: 0 }
    }

    /// Load configuration from environment variables.
    ///
    /// Uses `EVENTDRIPPER_SIGNING_TOLERANCE_SECS` when set, otherwise the
    /// default window.
    pub fn from_env() -> Result<Self, WebhookError> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var(TOLERANCE_ENV) {
            config.tolerance_secs = value.trim().parse().map_err(|_| {
                WebhookError::ConfigError(format!("Invalid {}: {:?}", TOLERANCE_ENV, value))
            })?;
        }

        Ok(config)
    }

    /// Whether the tolerance window is enforced
    pub fn tolerance_enabled(&self) -> bool {
        self.tolerance_secs > 0
    }
}

/// Builder for VerifierConfig
#[derive(Debug, Clone, Default)]
pub struct VerifierConfigBuilder {
    config: VerifierConfig,
}

impl VerifierConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: VerifierConfig::default(),
        }
    }

    /// Set the tolerance window in seconds
    pub fn tolerance_secs(mut self, seconds: u64) -> Self {
        self.config.tolerance_secs = seconds;
        self
    }

    /// Disable the tolerance window
    pub fn no_tolerance(mut self) -> Self {
        self.config.tolerance_secs = 0;
        self
    }

    /// Build the configuration
    pub fn build(self) -> VerifierConfig {
        self.config
    }
}
