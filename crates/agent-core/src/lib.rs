//! Core abstractions for stock-agent-tools
//!
//! This crate defines the session state handed to every tool invocation
//! and the error type shared by the tool layer.

pub mod context;
pub mod error;

pub use context::Context;
pub use error::{Error, Result};
