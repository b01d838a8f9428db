pub mod errors;
pub mod session;

pub use errors::{AtelierError, ConfigError, PlatformError};
pub use session::{SessionTarget, ALL_SESSIONS, DEFAULT_SESSION};

pub type Result<T> = std::result::Result<T, AtelierError>;
