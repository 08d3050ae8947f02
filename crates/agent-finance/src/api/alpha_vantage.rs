//! Alpha Vantage API client

use crate::error::{FinanceError, Result};
use crate::profile::{ProviderProfile, fields};
use crate::provider::DataProvider;
use crate::ticker::Ticker;
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

const BASE_URL: &str = "https://www.alphavantage.co/query";

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Alpha Vantage API client
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    rate_limiter: SharedRateLimiter,
}

/// Subset of the `OVERVIEW` response used for company profiles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyOverview {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub analyst_target_price: Option<String>,
}

impl CompanyOverview {
    /// Convert into profile fields; missing values are left out
    pub fn into_profile(self) -> ProviderProfile {
        let mut profile = ProviderProfile::new();
        if let Some(name) = self.name {
            profile.set(fields::LONG_NAME, name);
        }
        if let Some(sector) = self.sector {
            profile.set(fields::SECTOR, sector);
        }
        if let Some(industry) = self.industry {
            profile.set(fields::INDUSTRY, industry);
        }
        if let Some(target) = self.analyst_target_price {
            profile.set(fields::TARGET_MEAN_PRICE, target);
        }
        profile
    }
}

impl AlphaVantageClient {
    /// Create a new Alpha Vantage client
    ///
    /// # Arguments
    /// * `api_key` - Alpha Vantage API key
    /// * `rate_limit` - Maximum requests per minute (5 on the free tier)
    /// * `timeout` - Per-request timeout
    pub fn new(api_key: impl Into<String>, rate_limit: u32, timeout: Duration) -> Result<Self> {
        let quota = Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::MIN));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            rate_limiter,
        })
    }

    /// Get company overview data
    pub async fn get_company_overview(&self, ticker: &Ticker) -> Result<CompanyOverview> {
        // Wait for rate limiter
        self.rate_limiter.until_ready().await;

        let params = [
            ("function", "OVERVIEW"),
            ("symbol", ticker.as_str()),
            ("apikey", self.api_key.as_str()),
        ];

        let response = self.client.get(BASE_URL).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(FinanceError::AlphaVantageError(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let data: serde_json::Value = response.json().await?;
        parse_overview(data)
    }
}

/// Interpret an `OVERVIEW` payload
///
/// An empty object means the symbol is unknown to Alpha Vantage and yields
/// an empty overview rather than an error.
fn parse_overview(data: serde_json::Value) -> Result<CompanyOverview> {
    if let Some(error) = data.get("Error Message") {
        return Err(FinanceError::AlphaVantageError(error.to_string()));
    }

    if data.get("Note").is_some() || data.get("Information").is_some() {
        return Err(FinanceError::RateLimitExceeded {
            provider: "Alpha Vantage".to_string(),
        });
    }

    if data.as_object().is_none_or(serde_json::Map::is_empty) {
        return Ok(CompanyOverview::default());
    }

    Ok(serde_json::from_value(data)?)
}

#[async_trait]
impl DataProvider for AlphaVantageClient {
    async fn profile(&self, ticker: &Ticker) -> Result<ProviderProfile> {
        Ok(self.get_company_overview(ticker).await?.into_profile())
    }

    fn name(&self) -> &'static str {
        "alpha_vantage"
    }
}
