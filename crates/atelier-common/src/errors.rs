use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("page description error: {0}")]
    PageError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AtelierError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("console error: {0}")]
    Console(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("empty log directive".into());
        assert_eq!(
            err.to_string(),
            "config validation error: empty log directive"
        );

        let err = ConfigError::PageError("element without id".into());
        assert_eq!(err.to_string(), "page description error: element without id");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::ClipboardError("access denied".into());
        assert_eq!(err.to_string(), "clipboard error: access denied");

        let err = PlatformError::NotSupported("linux wayland".into());
        assert_eq!(err.to_string(), "not supported: linux wayland");
    }

    #[test]
    fn atelier_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: AtelierError = config_err.into();
        assert!(matches!(err, AtelierError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn atelier_error_from_platform() {
        let platform_err = PlatformError::ClipboardError("denied".into());
        let err: AtelierError = platform_err.into();
        assert!(matches!(err, AtelierError::Platform(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn atelier_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AtelierError = io_err.into();
        assert!(matches!(err, AtelierError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn atelier_error_other_variants() {
        let err = AtelierError::Console("conduit closed".into());
        assert_eq!(err.to_string(), "console error: conduit closed");

        let err = AtelierError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
