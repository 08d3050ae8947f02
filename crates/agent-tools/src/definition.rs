//! Tool definition types handed to the agent runtime

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition for the agent runtime
///
/// This describes a tool the runtime can call, including its name,
/// description, and input schema in JSON Schema format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (must match the tool in ToolRegistry)
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON schema for the tool's input parameters
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Create a new tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Helper module to build JSON schemas for tools
pub mod schema {
    use serde_json::{Value, json};

    /// Create a JSON schema for an object with properties
    pub fn object(properties: Value, required: Vec<&str>) -> Value {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Object schema that rejects properties not listed
    ///
    /// Used for structured output, where downstream parsing depends on an
    /// exact field set.
    pub fn closed_object(properties: Value, required: Vec<&str>) -> Value {
        let mut schema = object(properties, required);
        schema["additionalProperties"] = json!(false);
        schema
    }

    /// String property schema
    pub fn string(description: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
        })
    }

    /// String property restricted to a fixed set of literals
    pub fn string_enum(description: &str, values: &[&str]) -> Value {
        json!({
            "type": "string",
            "description": description,
            "enum": values,
        })
    }

    /// Number property schema
    pub fn number(description: &str) -> Value {
        json!({
            "type": "number",
            "description": description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_definition_creation() {
        let schema = schema::object(
            json!({
                "ticker": schema::string("Stock ticker"),
            }),
            vec!["ticker"],
        );

        let tool = ToolDefinition::new("get_stock_price", "Fetch a price", schema.clone());
        assert_eq!(tool.name, "get_stock_price");
        assert_eq!(tool.description, "Fetch a price");
        assert_eq!(tool.input_schema, schema);
    }

    #[test]
    fn test_closed_object_rejects_extras() {
        let schema = schema::closed_object(json!({ "a": schema::number("a") }), vec!["a"]);
        assert_eq!(schema["additionalProperties"], false);
        assert_eq!(schema["type"], "object");
    }

    #[test]
    fn test_string_enum() {
        let schema = schema::string_enum("verdict", &["Buy", "Sell"]);
        assert_eq!(schema["enum"], json!(["Buy", "Sell"]));
    }
}
