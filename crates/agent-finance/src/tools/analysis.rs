//! Tool producing a structured Buy/Sell recommendation

use agent_core::{Context, Result as AgentResult};
use agent_tools::Tool;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::{TickerParams, ticker_schema};
use crate::provider::DataProvider;
use crate::recommendation::{PriceTargets, Recommendation, recommend};
use crate::ticker::Ticker;

/// Context key the latest analysis is stored under
pub const STOCK_ANALYSIS: &str = "stock_analysis";

/// `get_stock_analysis`: `{"ticker", "recommendation"}` record
///
/// Unlike the text tools, failures are returned as errors: there is no
/// valid record to fall back to.
pub struct StockAnalysisTool {
    provider: Arc<dyn DataProvider>,
    output_key: &'static str,
}

impl StockAnalysisTool {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self {
            provider,
            output_key: STOCK_ANALYSIS,
        }
    }

    /// Store results under a different context key
    pub fn with_output_key(mut self, key: &'static str) -> Self {
        self.output_key = key;
        self
    }

    pub fn output_key(&self) -> &'static str {
        self.output_key
    }

    /// Fetch prices and apply the recommendation rule
    pub async fn analyze(&self, ticker: Ticker) -> crate::Result<Recommendation> {
        let profile = self.provider.profile(&ticker).await?;
        let targets = PriceTargets::from_profile(&profile);
        tracing::debug!(%ticker, current = targets.current, target = targets.target, "Analyzing");
        Ok(recommend(ticker, targets))
    }
}

#[async_trait]
impl Tool for StockAnalysisTool {
    async fn execute(&self, params: Value, context: &mut Context) -> AgentResult<Value> {
        let params = TickerParams::parse(params)?;
        let ticker = Ticker::new(&params.ticker)?;

        let recommendation = self.analyze(ticker).await?;
        context.insert_typed(self.output_key, &recommendation)?;

        Ok(recommendation.to_value()?)
    }

    fn name(&self) -> &'static str {
        "get_stock_analysis"
    }

    fn description(&self) -> &'static str {
        "Recommend Buy or Sell for a stock ticker: Buy when the analyst target price \
         is above the current price, otherwise Sell."
    }

    fn input_schema(&self) -> Value {
        ticker_schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use crate::provider::{MockDataProvider, StaticProvider};
    use crate::recommendation::Verdict;
    use serde_json::json;

    #[tokio::test]
    async fn test_structured_output_and_context() {
        let tool = StockAnalysisTool::new(Arc::new(StaticProvider::sample().unwrap()));
        let mut ctx = Context::new();

        let out = tool.execute(json!({"ticker": "aapl"}), &mut ctx).await.unwrap();
        assert_eq!(out, json!({"ticker": "AAPL", "recommendation": "Buy"}));

        let stored: Recommendation = ctx.get_typed(STOCK_ANALYSIS).unwrap().unwrap();
        assert_eq!(stored.recommendation, Verdict::Buy);

        let out = tool.execute(json!({"ticker": "TSLA"}), &mut ctx).await.unwrap();
        assert_eq!(out["recommendation"], "Sell");
    }

    #[tokio::test]
    async fn test_unknown_ticker_is_sell() {
        let tool = StockAnalysisTool::new(Arc::new(StaticProvider::new()));
        let rec = tool.analyze(Ticker::new("NEW").unwrap()).await.unwrap();
        assert_eq!(rec.recommendation, Verdict::Sell);
    }

    #[tokio::test]
    async fn test_provider_failure_is_error() {
        let mut mock = MockDataProvider::new();
        mock.expect_profile()
            .returning(|_| Err(FinanceError::AlphaVantageError("bad key".to_string())));

        let tool = StockAnalysisTool::new(Arc::new(mock)).with_output_key("analysis");
        let mut ctx = Context::new();

        let result = tool.execute(json!({"ticker": "AAPL"}), &mut ctx).await;
        assert!(matches!(result, Err(agent_core::Error::ProcessingFailed(_))));
        assert!(!ctx.contains_key("analysis"));
    }
}
