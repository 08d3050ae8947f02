//! Key-value profiles returned by data providers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Well-known profile keys
pub mod fields {
    /// Last traded price, used by the quote lookup
    pub const REGULAR_MARKET_PRICE: &str = "regularMarketPrice";
    /// Current price, used by the recommendation rule
    pub const CURRENT_PRICE: &str = "currentPrice";
    /// Analyst consensus target price
    pub const TARGET_MEAN_PRICE: &str = "targetMeanPrice";
    /// Full company name
    pub const LONG_NAME: &str = "longName";
    pub const SECTOR: &str = "sector";
    pub const INDUSTRY: &str = "industry";
}

/// Provider data for one ticker
///
/// Reads never fail: a missing key, `null`, a non-finite number, an empty
/// string, or the literal `"None"` (as some APIs send it) all mean the
/// field is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderProfile {
    fields: BTreeMap<String, Value>,
}

impl ProviderProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Raw value for `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Numeric field, accepting JSON numbers and numeric strings
    pub fn number(&self, key: &str) -> Option<f64> {
        let value = match self.fields.get(key)? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Text field
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key)? {
            Value::String(s) if !s.trim().is_empty() && s != "None" => Some(s.as_str()),
            _ => None,
        }
    }

    /// Merge `other` into this profile, keeping existing values on conflict
    pub fn merge(&mut self, other: ProviderProfile) {
        for (key, value) in other.fields {
            self.fields.entry(key).or_insert(value);
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
