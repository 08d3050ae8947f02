//! Configuration for market data tools

use crate::error::{FinanceError, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Environment variable holding the Alpha Vantage API key
pub const ALPHA_VANTAGE_API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

/// Configuration for market data tools
///
/// Deserialized configs fill gaps from the defaults and are validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawFinanceConfig")]
pub struct FinanceConfig {
    /// Alpha Vantage API key (optional, enables company info and target prices)
    pub alpha_vantage_api_key: Option<String>,

    /// Alpha Vantage requests per minute
    pub alpha_vantage_rate_limit: u32,

    /// How long a fetched profile is reused
    pub cache_ttl: Duration,

    /// Request timeout duration
    pub request_timeout: Duration,

    /// Maximum recent searches kept per session (`None` keeps all)
    pub history_capacity: Option<usize>,

    /// Currency label printed after prices
    pub currency: String,

    /// Model identifier passed to the agent runtime
    pub model: String,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            alpha_vantage_api_key: None,
            alpha_vantage_rate_limit: 5, // free tier
            cache_ttl: Duration::from_secs(60),
            request_timeout: Duration::from_secs(30),
            history_capacity: Some(20),
            currency: "USD".to_string(),
            model: "gemini-2.0-flash".to_string(),
        }
    }
}

/// Unvalidated wire form of `FinanceConfig`
#[derive(Deserialize)]
#[serde(default)]
struct RawFinanceConfig {
    alpha_vantage_api_key: Option<String>,
    alpha_vantage_rate_limit: u32,
    cache_ttl: Duration,
    request_timeout: Duration,
    history_capacity: Option<usize>,
    currency: String,
    model: String,
}

impl Default for RawFinanceConfig {
    fn default() -> Self {
        let defaults = FinanceConfig::default();
        Self {
            alpha_vantage_api_key: defaults.alpha_vantage_api_key,
            alpha_vantage_rate_limit: defaults.alpha_vantage_rate_limit,
            cache_ttl: defaults.cache_ttl,
            request_timeout: defaults.request_timeout,
            history_capacity: defaults.history_capacity,
            currency: defaults.currency,
            model: defaults.model,
        }
    }
}

impl TryFrom<RawFinanceConfig> for FinanceConfig {
    type Error = FinanceError;

    fn try_from(raw: RawFinanceConfig) -> Result<Self> {
        let config = FinanceConfig {
            alpha_vantage_api_key: raw.alpha_vantage_api_key,
            alpha_vantage_rate_limit: raw.alpha_vantage_rate_limit,
            cache_ttl: raw.cache_ttl,
            request_timeout: raw.request_timeout,
            history_capacity: raw.history_capacity,
            currency: raw.currency,
            model: raw.model,
        };
        config.validate()?;
        Ok(config)
    }
}

impl FinanceConfig {
    /// Create a new configuration builder
    pub fn builder() -> FinanceConfigBuilder {
        FinanceConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.alpha_vantage_rate_limit == 0 {
            return Err(FinanceError::ConfigError(
                "alpha_vantage_rate_limit must be greater than 0".to_string(),
            ));
        }

        if self.history_capacity == Some(0) {
            return Err(FinanceError::ConfigError(
                "history_capacity must be greater than 0 (use None for unbounded)".to_string(),
            ));
        }

        if self.currency.trim().is_empty() {
            return Err(FinanceError::ConfigError("currency must not be empty".to_string()));
        }

        Ok(())
    }

    /// History bound as a non-zero size
    pub fn history_limit(&self) -> Option<NonZeroUsize> {
        self.history_capacity.and_then(NonZeroUsize::new)
    }
}

/// Builder for FinanceConfig
#[derive(Debug, Default)]
pub struct FinanceConfigBuilder {
    alpha_vantage_api_key: Option<String>,
    alpha_vantage_rate_limit: Option<u32>,
    cache_ttl: Option<Duration>,
    request_timeout: Option<Duration>,
    history_capacity: Option<Option<usize>>,
    currency: Option<String>,
    model: Option<String>,
}

impl FinanceConfigBuilder {
    /// Set Alpha Vantage API key
    pub fn alpha_vantage_api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = Some(key.into());
        self
    }

    /// Load Alpha Vantage API key from environment
    pub fn with_env_api_key(mut self) -> Self {
        if let Ok(key) = std::env::var(ALPHA_VANTAGE_API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.alpha_vantage_api_key = Some(key);
            }
        }
        self
    }

    /// Set Alpha Vantage requests per minute
    pub fn alpha_vantage_rate_limit(mut self, per_minute: u32) -> Self {
        self.alpha_vantage_rate_limit = Some(per_minute);
        self
    }

    /// Set profile cache TTL
    pub fn cache_ttl(mut self, duration: Duration) -> Self {
        self.cache_ttl = Some(duration);
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Bound the per-session search history
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = Some(Some(capacity));
        self
    }

    /// Keep every search for the lifetime of the session
    pub fn unbounded_history(mut self) -> Self {
        self.history_capacity = Some(None);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<FinanceConfig> {
        let defaults = FinanceConfig::default();

        let config = FinanceConfig {
            alpha_vantage_api_key: self.alpha_vantage_api_key,
            alpha_vantage_rate_limit: self
                .alpha_vantage_rate_limit
                .unwrap_or(defaults.alpha_vantage_rate_limit),
            cache_ttl: self.cache_ttl.unwrap_or(defaults.cache_ttl),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            history_capacity: self.history_capacity.unwrap_or(defaults.history_capacity),
            currency: self.currency.unwrap_or(defaults.currency),
            model: self.model.unwrap_or(defaults.model),
        };

        config.validate()?;
        Ok(config)
    }
}
