//! Buy/Sell recommendation and its structured-output contract

use agent_tools::schema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

use crate::error::{FinanceError, Result};
use crate::profile::{ProviderProfile, fields};
use crate::ticker::Ticker;

/// The two allowed recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Buy,
    Sell,
}

impl Verdict {
    pub const ALL: [&'static str; 2] = ["Buy", "Sell"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current and analyst target price for one ticker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTargets {
    pub current: f64,
    pub target: f64,
}

impl PriceTargets {
    pub fn new(current: f64, target: f64) -> Self {
        Self { current, target }
    }

    /// Read both prices, treating a missing value as zero
    pub fn from_profile(profile: &ProviderProfile) -> Self {
        Self {
            current: profile.number(fields::CURRENT_PRICE).unwrap_or(0.0),
            target: profile.number(fields::TARGET_MEAN_PRICE).unwrap_or(0.0),
        }
    }

    /// `Buy` only when the target is strictly above the current price
    ///
    /// Equal prices, and two missing prices, both give `Sell`.
    pub fn verdict(&self) -> Verdict {
        if self.target > self.current {
            Verdict::Buy
        } else {
            Verdict::Sell
        }
    }
}

/// Structured analysis result with exactly two fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recommendation {
    pub ticker: Ticker,
    pub recommendation: Verdict,
}

impl Recommendation {
    /// Serialize to the wire form `{"ticker": ..., "recommendation": ...}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Validate structured output produced elsewhere (e.g. by a model)
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| FinanceError::InvalidOutput(e.to_string()))
    }

    /// JSON Schema of the record, for runtimes that constrain output
    pub fn output_schema() -> Value {
        schema::closed_object(
            json!({
                "ticker": schema::string("Stock symbol"),
                "recommendation": schema::string_enum("Buy or Sell recommendation", &Verdict::ALL),
            }),
            vec!["ticker", "recommendation"],
        )
    }
}

/// Apply the target-price rule to a ticker
pub fn recommend(ticker: Ticker, targets: PriceTargets) -> Recommendation {
    Recommendation {
        ticker,
        recommendation: targets.verdict(),
    }
}
