//! RON configuration for `nblocks`.
//!
//! Loaded from `~/.config/notion-blocks/config.ron` unless `--config` points
//! elsewhere. Every field is optional; missing ones take their defaults.
//!
//! Example config.ron:
//! ```ron
//! (
//!     indent: 4,
//!     toggle_marker: "▾",
//!     pretty_json: false,
//! )
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Rendering and output options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spaces per nesting level in rendered outlines.
    pub indent: usize,
    pub toggle_marker: String,
    pub bullet_marker: String,
    pub quote_marker: String,
    /// Line printed for divider blocks.
    pub divider: String,
    /// Pretty-print JSON output (`--compact` overrides).
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: 2,
            toggle_marker: "▸".into(),
            bullet_marker: "•".into(),
            quote_marker: ">".into(),
            divider: "---".into(),
            pretty_json: true,
        }
    }
}

/// Errors that can occur when loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Default config file path (`~/.config/notion-blocks/config.ron`).
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("notion-blocks").join("config.ron"))
}

/// Load configuration.
///
/// An explicit path must load cleanly. The default path is best-effort: a
/// missing or broken file logs and falls back to `Config::default()`.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        let config = load_config_from_file(path)?;
        tracing::info!("Loaded config from {:?}", path);
        return Ok(config);
    }

    let Some(path) = config_file_path() else {
        tracing::info!("No config directory available, using default config");
        return Ok(Config::default());
    };

    if !path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    match load_config_from_file(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", path);
            Ok(config)
        }
        Err(e) => {
            tracing::warn!("Failed to load config from {:?}: {}", path, e);
            tracing::warn!("Falling back to default config");
            Ok(Config::default())
        }
    }
}

/// Read and parse one config file.
pub fn load_config_from_file(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    Ok(ron::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = parse_config("(indent: 4, toggle_marker: \"▾\")").unwrap();
        assert_eq!(config.indent, 4);
        assert_eq!(config.toggle_marker, "▾");
        assert_eq!(config.bullet_marker, Config::default().bullet_marker);
        assert!(config.pretty_json);
    }

    #[test]
    fn test_invalid_ron_is_error() {
        assert!(matches!(parse_config("(indent: \"wide\")"), Err(ConfigError::Ron(_))));
    }

    #[test]
    fn test_explicit_path_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        std::fs::write(&path, "(pretty_json: false, divider: \"***\")").unwrap();
        let config = load_config(Some(path.as_path())).unwrap();
        assert!(!config.pretty_json);
        assert_eq!(config.divider, "***");
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.ron");
        let result = load_config(Some(path.as_path()));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
