//! API clients for market data providers

pub mod alpha_vantage;
pub mod yahoo;

pub use alpha_vantage::{AlphaVantageClient, CompanyOverview};
pub use yahoo::YahooFinanceClient;

use crate::config::FinanceConfig;
use crate::error::Result;
use crate::profile::ProviderProfile;
use crate::provider::DataProvider;
use crate::ticker::Ticker;
use async_trait::async_trait;

/// Composite provider used against live markets
///
/// Prices come from Yahoo Finance. Company name, sector, industry and the
/// analyst target price come from Alpha Vantage when an API key is
/// configured; without one those fields are simply absent.
pub struct MarketDataClient {
    yahoo: YahooFinanceClient,
    alpha_vantage: Option<AlphaVantageClient>,
}

impl MarketDataClient {
    /// Build the clients described by `config`
    pub fn new(config: &FinanceConfig) -> Result<Self> {
        let alpha_vantage = config
            .alpha_vantage_api_key
            .as_ref()
            .map(|key| {
                AlphaVantageClient::new(
                    key.clone(),
                    config.alpha_vantage_rate_limit,
                    config.request_timeout,
                )
            })
            .transpose()?;

        if alpha_vantage.is_none() {
            tracing::warn!("No Alpha Vantage API key configured; company info will be unavailable");
        }

        Ok(Self {
            yahoo: YahooFinanceClient::new(),
            alpha_vantage,
        })
    }

    /// Whether descriptive company fields can be fetched
    pub fn has_company_data(&self) -> bool {
        self.alpha_vantage.is_some()
    }
}

#[async_trait]
impl DataProvider for MarketDataClient {
    async fn profile(&self, ticker: &Ticker) -> Result<ProviderProfile> {
        let mut profile = self.yahoo.profile(ticker).await?;

        if let Some(ref client) = self.alpha_vantage {
            profile.merge(client.profile(ticker).await?);
        }

        tracing::debug!(%ticker, fields = profile.len(), "Fetched market profile");
        Ok(profile)
    }

    fn name(&self) -> &'static str {
        "market_data"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_api_key() {
        let client = MarketDataClient::new(&FinanceConfig::default()).unwrap();
        assert!(!client.has_company_data());
    }

    #[test]
    fn test_with_api_key() {
        let config = FinanceConfig::builder()
            .alpha_vantage_api_key("demo")
            .build()
            .unwrap();
        let client = MarketDataClient::new(&config).unwrap();
        assert!(client.has_company_data());
        assert_eq!(client.name(), "market_data");
    }
}
