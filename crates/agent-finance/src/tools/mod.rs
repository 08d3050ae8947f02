//! Stock lookup tools for agent runtimes

pub mod analysis;
pub mod info;
pub mod price;

pub use analysis::StockAnalysisTool;
pub use info::StockInfoTool;
pub use price::StockPriceTool;

use agent_tools::schema;
use serde::Deserialize;
use serde_json::{Value, json};

/// Parameters shared by every stock tool
#[derive(Debug, Deserialize)]
struct TickerParams {
    ticker: String,
}

impl TickerParams {
    fn parse(params: Value) -> agent_core::Result<Self> {
        serde_json::from_value(params).map_err(|e| {
            agent_core::Error::ProcessingFailed(format!("Invalid parameters: {e}"))
        })
    }
}

fn ticker_schema() -> Value {
    schema::object(
        json!({
            "ticker": schema::string("Stock ticker symbol (e.g., 'AAPL', 'TSLA')"),
        }),
        vec!["ticker"],
    )
}
