//! Ticker symbols

use crate::error::{FinanceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trimmed, uppercase ticker symbol such as `AAPL`
///
/// Only blank input is rejected. Whether the symbol names a real
/// instrument is left to the data provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Normalize and wrap a symbol
    pub fn new(symbol: impl AsRef<str>) -> Result<Self> {
        let raw = symbol.as_ref();
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(FinanceError::InvalidTicker(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = FinanceError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
