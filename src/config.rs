//! Driver configuration loaded from `config.toml`.

use crate::error::{CalcpadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How the display is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Expression line above the current input.
    #[default]
    Text,
    /// One `DisplayState` JSON object per display.
    Json,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    /// Print the display after every key instead of once per script.
    pub trace: bool,
    /// Copy the final display to the clipboard.
    pub copy_result: bool,
}

impl Config {
    /// Default location: `<config dir>/calcpad/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| CalcpadError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| CalcpadError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from the default location, if one exists for this platform.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("format = \"json\"").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.trace);
        assert!(!config.copy_result);
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
            format = "text"
            trace = true
            copy_result = true
            "#,
        )
        .unwrap();
        assert!(config.trace);
        assert!(config.copy_result);
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Config::parse("format = \"yaml\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load(Path::new("/nonexistent/calcpad/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
