//! Argument objects for registered actions.
//!
//! Markup supplies arguments as a JSON object; each handler carries its
//! own defaults. Merging is shallow: explicit keys override defaults
//! wholesale, one level deep, nested objects are never merged partially.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A string-keyed argument mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionArgs(Map<String, Value>);

impl ActionArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a JSON value as an argument object. Non-objects yield
    /// `None`; callers treat that as malformed markup.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(|map| Self(map.clone()))
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Explicit values override `defaults`; missing keys fall back.
    pub fn merged_over(&self, defaults: &ActionArgs) -> ActionArgs {
        let mut merged = defaults.0.clone();
        for (key, value) in &self.0 {
            merged.insert(key.clone(), value.clone());
        }
        Self(merged)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn bool_or(&self, key: &str, fallback: bool) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(fallback)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
