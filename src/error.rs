//! Errors raised outside the calculator engine.
//!
//! The engine itself never fails; these cover keypad input, configuration
//! and the clipboard.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcpadError {
    #[error("unknown key {key:?} at position {position}")]
    UnknownKey { key: String, position: usize },

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("clipboard unavailable")]
    Clipboard(#[from] arboard::Error),
}

pub type Result<T> = std::result::Result<T, CalcpadError>;
