//! Session state for tool invocations
//!
//! The `Context` struct is a key-value store owned by one conversational
//! session. The caller creates it, passes it by `&mut` to every tool call
//! and drops it together with the session.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Well-known context keys
pub mod keys {
    /// Session ID for tracking
    pub const SESSION_ID: &str = "session_id";
}

/// Per-session state passed to tools during execution
///
/// Values are stored as JSON so tools from different crates can share the
/// container without sharing types. Typed accessors serialize on the way in
/// and deserialize on the way out.
///
/// # Example
///
/// ```
/// use agent_core::Context;
///
/// let mut ctx = Context::new().with_session_id("session-123");
/// ctx.insert("greeting", serde_json::json!("hello"));
///
/// assert_eq!(ctx.session_id(), Some("session-123"));
/// assert!(ctx.contains_key("greeting"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    data: HashMap<String, serde_json::Value>,
}

impl Context {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session ID
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.insert(keys::SESSION_ID, serde_json::json!(session_id.into()));
        self
    }

    /// Get the session ID
    pub fn session_id(&self) -> Option<&str> {
        self.get(keys::SESSION_ID).and_then(|v| v.as_str())
    }

    // =========== Generic Key-Value Operations ===========

    /// Insert a value into the context
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    /// Get a value from the context
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Insert a typed value into the context
    ///
    /// Serializes the value to JSON before storing.
    pub fn insert_typed<T: Serialize>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> crate::Result<()> {
        let json_value = serde_json::to_value(value).map_err(|e| {
            crate::Error::ProcessingFailed(format!("Failed to serialize context value: {e}"))
        })?;
        self.data.insert(key.into(), json_value);
        Ok(())
    }

    /// Get a typed value from the context
    ///
    /// Deserializes the JSON value into the specified type.
    pub fn get_typed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> crate::Result<Option<T>> {
        match self.data.get(key) {
            None => Ok(None),
            Some(value) => {
                let typed = serde_json::from_value(value.clone()).map_err(|e| {
                    crate::Error::ProcessingFailed(format!(
                        "Failed to deserialize context value: {e}"
                    ))
                })?;
                Ok(Some(typed))
            }
        }
    }

    /// Read-modify-write a typed value
    ///
    /// A missing key starts from `T::default()`. The updated value is written
    /// back even when `f` leaves it unchanged, so the key exists afterwards.
    pub fn update_typed<T, F>(&mut self, key: &str, f: F) -> crate::Result<()>
    where
        T: Serialize + for<'de> Deserialize<'de> + Default,
        F: FnOnce(&mut T),
    {
        let mut value: T = self.get_typed(key)?.unwrap_or_default();
        f(&mut value);
        self.insert_typed(key, &value)
    }

    /// Check if a key exists in the context
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Remove a value from the context
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }

    /// Clear all values from the context
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the number of entries in the context
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the context is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Watch {
        symbols: Vec<String>,
    }

    #[test]
    fn test_basic_operations() {
        let mut ctx = Context::new();
        assert!(ctx.is_empty());

        ctx.insert("key", serde_json::json!("value"));
        assert_eq!(ctx.len(), 1);
        assert!(ctx.contains_key("key"));
        assert_eq!(ctx.get("key"), Some(&serde_json::json!("value")));

        ctx.remove("key");
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_typed_insert_get() {
        let mut ctx = Context::new();
        let data = Watch {
            symbols: vec!["AAPL".to_string()],
        };

        ctx.insert_typed("watch", &data).unwrap();

        let retrieved: Watch = ctx.get_typed("watch").unwrap().unwrap();
        assert_eq!(retrieved, data);
    }

    #[test]
    fn test_get_typed_missing_key() {
        let ctx = Context::new();
        let result: crate::Result<Option<Watch>> = ctx.get_typed("missing");
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_get_typed_wrong_shape() {
        let mut ctx = Context::new();
        ctx.insert("watch", serde_json::json!(42));

        let result: crate::Result<Option<Watch>> = ctx.get_typed("watch");
        assert!(result.is_err());
    }

    #[test]
    fn test_update_typed_initializes_missing_key() {
        let mut ctx = Context::new();
        assert!(!ctx.contains_key("watch"));

        ctx.update_typed::<Watch, _>("watch", |w| w.symbols.push("TSLA".to_string()))
            .unwrap();
        ctx.update_typed::<Watch, _>("watch", |w| w.symbols.push("MSFT".to_string()))
            .unwrap();

        let watch: Watch = ctx.get_typed("watch").unwrap().unwrap();
        assert_eq!(watch.symbols, vec!["TSLA", "MSFT"]);
    }

    #[test]
    fn test_session_id() {
        let ctx = Context::new().with_session_id("sess-123");
        assert_eq!(ctx.session_id(), Some("sess-123"));
    }

    #[test]
    fn test_clear() {
        let mut ctx = Context::new();
        ctx.insert("key1", serde_json::json!(1));
        ctx.insert("key2", serde_json::json!(2));
        assert_eq!(ctx.len(), 2);

        ctx.clear();
        assert!(ctx.is_empty());
    }
}
