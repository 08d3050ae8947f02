//! Data provider abstraction

use crate::error::{FinanceError, Result};
use crate::profile::ProviderProfile;
use crate::ticker::Ticker;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Source of per-ticker profile data
///
/// Implementations return `Ok` with whatever fields they could find; a
/// missing field is not an error. `Err` is reserved for the call itself
/// failing (network, API error, rate limit).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetch the profile for a ticker
    async fn profile(&self, ticker: &Ticker) -> Result<ProviderProfile>;

    /// Short provider name for logs
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<P: DataProvider + ?Sized> DataProvider for Arc<P> {
    async fn profile(&self, ticker: &Ticker) -> Result<ProviderProfile> {
        (**self).profile(ticker).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// In-memory provider backed by fixtures
///
/// Used for offline runs and tests. Unknown tickers get an empty profile,
/// which the lookups report as unavailable data.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    profiles: HashMap<Ticker, ProviderProfile>,
    failures: HashMap<Ticker, String>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `profile` for `ticker`
    pub fn with_profile(mut self, ticker: Ticker, profile: ProviderProfile) -> Self {
        self.profiles.insert(ticker, profile);
        self
    }

    /// Fail every lookup of `ticker` with `reason`
    pub fn with_failure(mut self, ticker: Ticker, reason: impl Into<String>) -> Self {
        self.failures.insert(ticker, reason.into());
        self
    }

    /// A small set of well-known companies for demos
    pub fn sample() -> Result<Self> {
        use crate::profile::fields;

        let entry = |price: f64, target: f64, name: &str, sector: &str, industry: &str| {
            ProviderProfile::new()
                .with(fields::REGULAR_MARKET_PRICE, price)
                .with(fields::CURRENT_PRICE, price)
                .with(fields::TARGET_MEAN_PRICE, target)
                .with(fields::LONG_NAME, name)
                .with(fields::SECTOR, sector)
                .with(fields::INDUSTRY, industry)
        };

        Ok(Self::new()
            .with_profile(
                Ticker::new("AAPL")?,
                entry(189.84, 215.3, "Apple Inc.", "Technology", "Consumer Electronics"),
            )
            .with_profile(
                Ticker::new("TSLA")?,
                entry(248.5, 201.0, "Tesla, Inc.", "Consumer Cyclical", "Auto Manufacturers"),
            )
            .with_profile(
                Ticker::new("MSFT")?,
                entry(415.1, 489.9, "Microsoft Corporation", "Technology", "Software - Infrastructure"),
            ))
    }
}

#[async_trait]
impl DataProvider for StaticProvider {
    async fn profile(&self, ticker: &Ticker) -> Result<ProviderProfile> {
        if let Some(reason) = self.failures.get(ticker) {
            return Err(FinanceError::DataUnavailable {
                ticker: ticker.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.profiles.get(ticker).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
