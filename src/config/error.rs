//! Errors surfaced by the loader

use std::path::PathBuf;
use thiserror::Error;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to open config file {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read config from {origin}: {source}")]
    Read {
        origin: String,
        source: std::io::Error,
    },

    #[error("failed to decode config from {origin}: {source}")]
    Decode {
        origin: String,
        source: serde_yaml::Error,
    },

    #[error("failed to parse config arguments: {0}")]
    Args(#[from] clap::Error),
}
