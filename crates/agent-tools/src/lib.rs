//! Tool management and execution framework
//!
//! This crate provides the seam between tool implementations and the
//! agent runtime that decides when to call them: the `Tool` trait, a
//! name-keyed `ToolRegistry`, and `ToolDefinition` descriptors with JSON
//! schema helpers.

pub mod definition;
pub mod registry;
pub mod tool;

pub use definition::{ToolDefinition, schema};
pub use registry::ToolRegistry;
pub use tool::Tool;
