//! Configuration loading and merging
//!
//! Handles loading from a primary YAML file, an optional `name.custom.ext`
//! override next to it, and a caller default used when no file is usable.

pub mod args;
pub mod error;
pub mod loader;
pub mod merge;
pub mod paths;

pub use args::{load_from_args, load_from_env_args, ConfigArgs};
pub use error::ConfigError;
pub use loader::{load_from_file, load_from_reader, ConfigSource};
pub use paths::{custom_path, CUSTOM_MARKER};
