//! Configuration error types
//!
//! The engine itself never fails; only loading a `GameConfig` can.

use std::path::PathBuf;

use thiserror::Error;

/// Error loading or validating a [`crate::GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parse but cannot describe a playable board
    #[error("invalid config: {0}")]
    Invalid(String),
}
