//! Stock lookup tools for agent runtimes
//!
//! This crate exposes market data to an external agent runtime as a small
//! set of tools:
//!
//! - `get_stock_price`: current price, optionally recording the ticker in
//!   the session's recent searches
//! - `get_stock_info`: company name, sector and industry
//! - `get_stock_analysis`: a `{"ticker", "recommendation"}` record where the
//!   recommendation is `Buy` when the analyst target is above the current
//!   price and `Sell` otherwise
//!
//! Prices come from Yahoo Finance, company data and target prices from
//! Alpha Vantage. Both sit behind the `DataProvider` trait, so an
//! in-memory `StaticProvider` can stand in for them.
//!
//! # Example
//!
//! ```rust,no_run
//! use agent_core::Context;
//! use agent_finance::{AgentKind, AgentSpec, CachedProvider, FinanceConfig, MarketDataClient};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = FinanceConfig::builder().with_env_api_key().build()?;
//! let provider = Arc::new(CachedProvider::new(MarketDataClient::new(&config)?, config.cache_ttl));
//! let agent = AgentSpec::build(AgentKind::MultiTool, provider, &config);
//!
//! let mut session = Context::new();
//! let answer = agent
//!     .tools
//!     .execute("get_stock_price", json!({"ticker": "AAPL"}), &mut session)
//!     .await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod history;
pub mod lookup;
pub mod profile;
pub mod provider;
pub mod recommendation;
pub mod ticker;
pub mod tools;

pub use agents::{AgentKind, AgentSpec};
pub use api::{AlphaVantageClient, MarketDataClient, YahooFinanceClient};
pub use cache::{CachedProvider, ProfileCache};
pub use config::FinanceConfig;
pub use error::{FinanceError, Result};
pub use history::SearchHistory;
pub use lookup::{CompanyProfile, LookupError, Quote};
pub use profile::ProviderProfile;
pub use provider::{DataProvider, StaticProvider};
pub use recommendation::{PriceTargets, Recommendation, Verdict};
pub use ticker::Ticker;
pub use tools::{StockAnalysisTool, StockInfoTool, StockPriceTool};
