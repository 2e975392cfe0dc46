//! layerconf: layered YAML configuration loading
//!
//! Populates a caller-owned structure from a primary file, falls back to a
//! default value when the file is missing or broken, and overlays an optional
//! `name.custom.ext` sibling whose fields win.
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize)]
//! struct Settings {
//!     port: u16,
//!     name: String,
//! }
//!
//! let mut settings = Settings::default();
//! let source = layerconf::load_from_file(&mut settings, "config.yaml", None)?;
//! println!("loaded from {source}");
//! # Ok::<(), layerconf::ConfigError>(())
//! ```

pub mod config;

pub use config::{
    custom_path, load_from_args, load_from_env_args, load_from_file, load_from_reader, ConfigArgs,
    ConfigError, ConfigSource, CUSTOM_MARKER,
};
