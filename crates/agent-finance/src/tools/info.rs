//! Tool for fetching company information

use agent_core::{Context, Result as AgentResult};
use agent_tools::Tool;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::{TickerParams, ticker_schema};
use crate::lookup::{lookup_company, render_company};
use crate::provider::DataProvider;
use crate::ticker::Ticker;

/// `get_stock_info`: company name, sector and industry as a sentence
pub struct StockInfoTool {
    provider: Arc<dyn DataProvider>,
}

impl StockInfoTool {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self { provider }
    }

    async fn info_message(&self, raw: &str) -> String {
        let ticker = match Ticker::new(raw) {
            Ok(ticker) => ticker,
            Err(e) => return render_company(&Err(e.into())),
        };

        let outcome = lookup_company(self.provider.as_ref(), &ticker).await;
        if let Err(ref e) = outcome {
            tracing::warn!(%ticker, error = %e, "Company lookup failed");
        }
        render_company(&outcome)
    }
}

#[async_trait]
impl Tool for StockInfoTool {
    async fn execute(&self, params: Value, _context: &mut Context) -> AgentResult<Value> {
        let params = TickerParams::parse(params)?;
        Ok(Value::String(self.info_message(&params.ticker).await))
    }

    fn name(&self) -> &'static str {
        "get_stock_info"
    }

    fn description(&self) -> &'static str {
        "Get the company name, sector and industry for a stock ticker symbol."
    }

    fn input_schema(&self) -> Value {
        ticker_schema()
    }
}
