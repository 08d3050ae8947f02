//! Yahoo Finance API client

use crate::error::{FinanceError, Result};
use crate::profile::{ProviderProfile, fields};
use crate::provider::DataProvider;
use crate::ticker::Ticker;
use async_trait::async_trait;
use yahoo_finance_api as yahoo;

/// Yahoo Finance API client
///
/// Supplies prices only. The last daily close fills both
/// `regularMarketPrice` and `currentPrice`.
#[derive(Debug, Clone, Default)]
pub struct YahooFinanceClient {}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {}
    }

    /// Latest close for a ticker, `None` when Yahoo has no quotes for it
    pub async fn latest_price(&self, ticker: &Ticker) -> Result<Option<f64>> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| FinanceError::YahooFinanceError(e.to_string()))?;

        let response = provider
            .get_latest_quotes(ticker.as_str(), "1d")
            .await
            .map_err(|e| FinanceError::YahooFinanceError(e.to_string()))?;

        match response.last_quote() {
            Ok(quote) => Ok(Some(quote.close).filter(|price| price.is_finite())),
            Err(e) => {
                tracing::debug!(%ticker, error = %e, "Yahoo returned no quotes");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl DataProvider for YahooFinanceClient {
    async fn profile(&self, ticker: &Ticker) -> Result<ProviderProfile> {
        let mut profile = ProviderProfile::new();
        if let Some(price) = self.latest_price(ticker).await? {
            profile.set(fields::REGULAR_MARKET_PRICE, price);
            profile.set(fields::CURRENT_PRICE, price);
        }
        Ok(profile)
    }

    fn name(&self) -> &'static str {
        "yahoo"
    }
}
