//! Terminal session addressing.
//!
//! Sessions are identified by short string keys. Two keys are special:
//! `"1"` is the implicit session used when a caller names none, and `"*"`
//! addresses every open session at once. Callers hand the bridge an
//! `Option<&str>` straight from markup or config; parsing it into a
//! [`SessionTarget`] up front means broadcast routing is decided by the
//! type, and a terminal literally named `"*"` cannot be reached.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved session key meaning "all sessions currently open".
pub const ALL_SESSIONS: &str = "*";

/// Implicit session used when a caller does not name one.
pub const DEFAULT_SESSION: &str = "1";

/// Where a terminal operation is directed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionTarget {
    /// A single session, by key.
    One(String),
    /// Every open session.
    All,
}

impl SessionTarget {
    /// Parse an optional caller-supplied session key.
    ///
    /// A missing or empty key falls back to [`DEFAULT_SESSION`]; the
    /// [`ALL_SESSIONS`] sentinel becomes [`SessionTarget::All`].
    pub fn parse(session: Option<&str>) -> Self {
        match session {
            None | Some("") => Self::One(DEFAULT_SESSION.to_string()),
            Some(key) if key == ALL_SESSIONS => Self::All,
            Some(key) => Self::One(key.to_string()),
        }
    }

    /// The session key this target would put on the wire.
    pub fn key(&self) -> &str {
        match self {
            Self::One(key) => key,
            Self::All => ALL_SESSIONS,
        }
    }
}

impl fmt::Display for SessionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
