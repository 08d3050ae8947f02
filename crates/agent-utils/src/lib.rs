//! Shared utilities for stock-agent-tools
//!
//! This crate holds the tracing setup shared by the binaries.

pub mod logging;

pub use logging::{init_tracing, init_tracing_with};
