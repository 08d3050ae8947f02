//! Tool trait definition

use agent_core::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::ToolDefinition;

/// Trait for tools that an agent runtime can execute
///
/// Each tool provides a name, description, and JSON schema for its input.
/// The runtime passes the session's `Context` so stateful tools can carry
/// information between invocations.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    /// * `context` - State owned by the calling session
    ///
    /// # Returns
    ///
    /// Tool output as JSON value
    async fn execute(&self, params: Value, context: &mut Context) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description helps the runtime's model decide when to use this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    ///
    /// # Example
    ///
    /// ```
    /// use agent_tools::schema;
    /// use serde_json::json;
    ///
    /// let schema = schema::object(
    ///     json!({ "ticker": schema::string("Stock ticker symbol") }),
    ///     vec!["ticker"],
    /// );
    /// assert_eq!(schema["required"][0], "ticker");
    /// ```
    fn input_schema(&self) -> Value;

    /// Describe the tool for registration with a runtime
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
    }
}
