//! Command messages posted across the frame boundary.
//!
//! When the lesson frame is embedded, its controllers are proxies: each
//! operation becomes one [`ConsoleMessage`] posted through a
//! [`FrameConduit`] into the parent context. The post is fire-and-forget;
//! the conduit's boolean only says whether the parent accepted the
//! message, never whether the command completed.

use serde::{Deserialize, Serialize};

/// A typed command message from the embedded frame to the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleMessage {
    /// The command name.
    pub kind: String,
    /// The command payload (arbitrary JSON).
    pub payload: serde_json::Value,
}

impl ConsoleMessage {
    /// Create a message with a JSON payload.
    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Create a payload-less message.
    pub fn bare(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: serde_json::Value::Null,
        }
    }

    /// Parse a message from a raw JSON string.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Serialize the message for the wire.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("null"))
    }
}

/// One-way conduit into the parent frame.
pub trait FrameConduit: Send + Sync {
    /// Post a command message. Returns `false` if the parent did not
    /// accept it (closed frame, rejected kind); the caller sees nothing
    /// further about its fate.
    fn post(&self, message: &ConsoleMessage) -> bool;
}
