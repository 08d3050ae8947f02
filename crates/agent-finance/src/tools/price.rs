//! Tool for fetching the current stock price

use agent_core::{Context, Result as AgentResult};
use agent_tools::Tool;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::{TickerParams, ticker_schema};
use crate::history::SearchHistory;
use crate::lookup::{LookupError, lookup_quote, render_quote};
use crate::provider::DataProvider;
use crate::ticker::Ticker;

/// `get_stock_price`: current price as a sentence
///
/// Always answers with text: missing prices and provider failures become
/// messages rather than errors. When built with a `SearchHistory`, every
/// ticker the provider answered for is recorded in the session context.
pub struct StockPriceTool {
    provider: Arc<dyn DataProvider>,
    history: Option<SearchHistory>,
    currency: String,
}

impl StockPriceTool {
    /// Stateless variant
    pub fn new(provider: Arc<dyn DataProvider>, currency: impl Into<String>) -> Self {
        Self {
            provider,
            history: None,
            currency: currency.into(),
        }
    }

    /// Record searched tickers in the session context
    pub fn with_history(mut self, history: SearchHistory) -> Self {
        self.history = Some(history);
        self
    }

    pub fn tracks_history(&self) -> bool {
        self.history.is_some()
    }

    async fn price_message(&self, raw: &str, context: &mut Context) -> String {
        let ticker = match Ticker::new(raw) {
            Ok(ticker) => ticker,
            Err(e) => return render_quote(&Err(e.into()), &self.currency),
        };

        let outcome = lookup_quote(self.provider.as_ref(), &ticker).await;

        // Only tickers the provider answered for are recorded.
        let answered = !matches!(outcome, Err(LookupError::Provider(_)));
        if let Some(history) = self.history.filter(|_| answered) {
            if let Err(e) = history.track(context, &ticker) {
                tracing::warn!(%ticker, error = %e, "Could not record search");
            }
        }

        if let Err(ref e) = outcome {
            tracing::warn!(%ticker, error = %e, "Price lookup failed");
        }

        render_quote(&outcome, &self.currency)
    }
}

#[async_trait]
impl Tool for StockPriceTool {
    async fn execute(&self, params: Value, context: &mut Context) -> AgentResult<Value> {
        let params = TickerParams::parse(params)?;
        let message = self.price_message(&params.ticker, context).await;
        Ok(Value::String(message))
    }

    fn name(&self) -> &'static str {
        "get_stock_price"
    }

    fn description(&self) -> &'static str {
        "Get the current market price of a stock by its ticker symbol."
    }

    fn input_schema(&self) -> Value {
        ticker_schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use crate::history::RECENT_SEARCHES;
    use crate::provider::{MockDataProvider, StaticProvider};
    use serde_json::json;

    fn sample_tool() -> StockPriceTool {
        StockPriceTool::new(Arc::new(StaticProvider::sample().unwrap()), "USD")
    }

    #[test]
    fn test_tool_metadata() {
        let tool = sample_tool();
        assert_eq!(tool.name(), "get_stock_price");
        assert!(!tool.description().is_empty());
        assert!(!tool.tracks_history());

        let schema = tool.input_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["ticker"].is_object());
    }

    #[tokio::test]
    async fn test_returns_sentence() {
        let tool = sample_tool();
        let mut ctx = Context::new();

        let out = tool.execute(json!({"ticker": "aapl"}), &mut ctx).await.unwrap();
        assert_eq!(out, json!("The current price of AAPL is 189.84 USD."));
        assert!(ctx.is_empty());
    }

    #[tokio::test]
    async fn test_stateful_tracks_searches() {
        let tool = sample_tool().with_history(SearchHistory::unbounded());
        let mut ctx = Context::new();

        for symbol in ["AAPL", "TSLA", "aapl", "ZZZZ"] {
            tool.execute(json!({ "ticker": symbol }), &mut ctx).await.unwrap();
        }

        assert_eq!(ctx.get(RECENT_SEARCHES), Some(&json!(["AAPL", "TSLA", "ZZZZ"])));
    }

    #[tokio::test]
    async fn test_provider_failure_is_text_and_not_tracked() {
        let mut mock = MockDataProvider::new();
        mock.expect_profile()
            .returning(|_| Err(FinanceError::YahooFinanceError("HTTP 503".to_string())));

        let tool = StockPriceTool::new(Arc::new(mock), "USD").with_history(SearchHistory::default());
        let mut ctx = Context::new();

        let out = tool.execute(json!({"ticker": "AAPL"}), &mut ctx).await.unwrap();
        assert_eq!(out, json!("Error fetching stock price: Yahoo Finance error: HTTP 503"));
        assert!(!ctx.contains_key(RECENT_SEARCHES));
    }

    #[tokio::test]
    async fn test_unreadable_history_still_answers() {
        let tool = sample_tool().with_history(SearchHistory::default());
        let mut ctx = Context::new();
        ctx.insert(RECENT_SEARCHES, json!(["aapl", ""]));

        let out = tool.execute(json!({"ticker": "MSFT"}), &mut ctx).await.unwrap();
        assert_eq!(out, json!("The current price of MSFT is 415.1 USD."));
        assert_eq!(ctx.get(RECENT_SEARCHES), Some(&json!(["aapl", ""])));

        ctx.insert(RECENT_SEARCHES, json!({"not": "a list"}));
        let out = tool.execute(json!({"ticker": "TSLA"}), &mut ctx).await.unwrap();
        assert_eq!(out, json!("The current price of TSLA is 248.5 USD."));
    }

    #[tokio::test]
    async fn test_blank_ticker_is_text() {
        let tool = sample_tool();
        let mut ctx = Context::new();

        let out = tool.execute(json!({"ticker": " "}), &mut ctx).await.unwrap();
        assert!(out.as_str().unwrap().starts_with("Error fetching stock price: Invalid ticker"));
    }

    #[tokio::test]
    async fn test_missing_parameter_is_error() {
        let tool = sample_tool();
        let mut ctx = Context::new();

        let result = tool.execute(json!({"symbol": "AAPL"}), &mut ctx).await;
        assert!(matches!(result, Err(agent_core::Error::ProcessingFailed(msg)) if msg.contains("Invalid parameters")));
    }
}
