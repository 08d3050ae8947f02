//! Per-session recent searches
//!
//! The list lives in the session `Context` under [`RECENT_SEARCHES`]. Each
//! ticker appears once, in order of first search. With a capacity set the
//! oldest entry is evicted to make room.

use agent_core::{Context, Result};
use std::num::NonZeroUsize;

use crate::ticker::Ticker;

/// Context key holding the recent-searches list
pub const RECENT_SEARCHES: &str = "recent_searches";

/// Tracks which tickers a session has looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHistory {
    capacity: Option<NonZeroUsize>,
}

impl SearchHistory {
    /// `None` keeps every distinct ticker for the lifetime of the session
    pub fn new(capacity: Option<NonZeroUsize>) -> Self {
        Self { capacity }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    /// Record a search, creating the list on first use
    pub fn track(&self, context: &mut Context, ticker: &Ticker) -> Result<()> {
        context.update_typed::<Vec<Ticker>, _>(RECENT_SEARCHES, |searches| {
            if searches.contains(ticker) {
                return;
            }
            if let Some(capacity) = self.capacity {
                let evict = (searches.len() + 1)
                    .saturating_sub(capacity.get())
                    .min(searches.len());
                searches.drain(..evict);
            }
            searches.push(ticker.clone());
        })?;

        tracing::debug!(%ticker, session = context.session_id(), "Tracked search");
        Ok(())
    }

    /// Tickers searched so far, oldest first
    pub fn recent(context: &Context) -> Result<Vec<Ticker>> {
        Ok(context
            .get_typed::<Vec<Ticker>>(RECENT_SEARCHES)?
            .unwrap_or_default())
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(20))
    }
}
