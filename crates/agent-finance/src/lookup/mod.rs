//! Quote and company lookups
//!
//! Lookups return a typed outcome. Turning it into the sentence an agent
//! runtime shows the user happens only in the `render_*` functions, so
//! failure classification can be tested apart from message wording.

pub mod company;
pub mod quote;

pub use company::{CompanyProfile, lookup_company, render_company};
pub use quote::{Quote, lookup_quote, render_quote};

use crate::error::FinanceError;
use crate::ticker::Ticker;
use thiserror::Error;

/// Why a lookup produced no value
#[derive(Debug, Error)]
pub enum LookupError {
    /// The provider answered but did not have the field
    #[error("{field} unavailable for {ticker}")]
    Unavailable {
        ticker: Ticker,
        field: &'static str,
    },

    /// The provider call itself failed
    #[error(transparent)]
    Provider(#[from] FinanceError),
}

impl LookupError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
