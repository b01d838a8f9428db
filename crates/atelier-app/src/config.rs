//! TOML configuration for the atelier shell.
//!
//! Every section defaults, so a partial config file works. A missing
//! file at the default location is also fine; the shell runs with
//! defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use atelier_bridge::ExposurePolicy;
use atelier_common::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AtelierConfig {
    pub log: LogConfig,
    pub exposure: ExposurePolicy,
    pub page: PageConfig,
}

impl Default for AtelierConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            exposure: ExposurePolicy::default(),
            page: PageConfig::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default tracing filter directive.
    pub directive: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directive: "atelier=info".into(),
        }
    }
}

/// Lesson page configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page description file; the built-in sample page is used when unset.
    pub path: Option<String>,
    /// Hostname lesson links are considered local to.
    pub hostname: Option<String>,
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<AtelierConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: AtelierConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from an explicit path, or the platform default when none
/// is given. A missing default file yields the default config.
pub fn load(override_path: Option<&Path>) -> Result<AtelierConfig, ConfigError> {
    match override_path {
        Some(path) => load_from_path(path),
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                return Ok(AtelierConfig::default());
            }
            load_from_path(&path)
        }
    }
}

/// Platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("atelier").join("config.toml"))
}

fn validate(config: &AtelierConfig) -> Result<(), ConfigError> {
    if config.log.directive.trim().is_empty() {
        return Err(ConfigError::ValidationError("empty log directive".into()));
    }
    if let Some(path) = &config.page.path {
        if path.trim().is_empty() {
            return Err(ConfigError::ValidationError("empty page path".into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_config_fills_defaults() {
        let file = write_config(
            r#"
            [exposure]
            interrupt_all = true
            "#,
        );
        let config = load_from_path(file.path()).unwrap();

        assert!(config.exposure.interrupt_all);
        assert!(config.exposure.clear_all);
        assert_eq!(config.log.directive, "atelier=info");
        assert_eq!(config.page.path, None);
    }

    #[test]
    fn full_config_roundtrip() {
        let file = write_config(
            r#"
            [log]
            directive = "atelier=debug"

            [page]
            path = "lesson.toml"
            hostname = "lesson.local"
            "#,
        );
        let config = load_from_path(file.path()).unwrap();

        assert_eq!(config.log.directive, "atelier=debug");
        assert_eq!(config.page.path.as_deref(), Some("lesson.toml"));
        assert_eq!(config.page.hostname.as_deref(), Some("lesson.local"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_from_path(Path::new("/nonexistent/atelier.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let file = write_config("not [valid toml");
        let err = load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn empty_directive_fails_validation() {
        let file = write_config(
            r#"
            [log]
            directive = "  "
            "#,
        );
        let err = load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
