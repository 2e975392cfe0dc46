//! Config file loading
//!
//! Precedence (highest to lowest):
//! 1. `name.custom.ext` next to the primary file
//! 2. the primary file
//! 3. the caller's default value (only when a source is missing or broken)

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::ConfigError;
use super::merge::overlay_document;
use super::paths::custom_path;

const READER_ORIGIN: &str = "reader";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No file was usable; the target holds the default value.
    Default,
    /// The primary file, with no custom override present.
    Primary(PathBuf),
    /// The custom override file, merged on top of the primary file.
    Custom(PathBuf),
}

impl ConfigSource {
    /// Path to report as the effective configuration source, `None` for the default.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Default => None,
            ConfigSource::Primary(path) | ConfigSource::Custom(path) => Some(path),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, ConfigSource::Default)
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("<default>"),
        }
    }
}

/// Decode a YAML document from `reader` onto `target`.
///
/// Fields the document does not mention keep their current values. The current
/// values are taken from serializing `target`, so a field only survives if it
/// round-trips through `Serialize` and `Deserialize`: a `skip_serializing`
/// field is reset to its serde default on every call.
///
/// Only the first document of a multi-document stream is read. A stream with no
/// document at all is a decode error; an explicit `~` document changes nothing.
/// When the document cannot be read or decoded, `target` is replaced by a copy
/// of `default` if one is given; otherwise the error is returned and `target` is
/// left as it was.
pub fn load_from_reader<T, R>(
    target: &mut T,
    reader: R,
    default: Option<&T>,
) -> Result<(), ConfigError>
where
    T: Serialize + DeserializeOwned + Clone,
    R: Read,
{
    decode_into(target, &mut None, reader, default, READER_ORIGIN)
}

/// Load `path` into `target`, then overlay `name.custom.ext` if it exists.
///
/// A missing primary file is only an error when no default is given. A missing
/// custom file is never an error. The custom file is overlaid on the merged
/// YAML of the primary step rather than on a re-serialized `target`, so fields
/// that do not serialize (`skip_serializing` and friends) still fall through
/// from the primary file when the custom file leaves them out.
pub fn load_from_file<T>(
    target: &mut T,
    path: impl AsRef<Path>,
    default: Option<&T>,
) -> Result<ConfigSource, ConfigError>
where
    T: Serialize + DeserializeOwned + Clone,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading configuration");

    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            warn!(path = %path.display(), error = %source, "Configuration not found");
            return match default {
                Some(default) => {
                    warn!("Default value is defined, using it");
                    *target = default.clone();
                    Ok(ConfigSource::Default)
                }
                None => Err(ConfigError::FileNotFound { path: path.to_path_buf(), source }),
            };
        }
    };
    let mut merged = None;
    let origin = path.display().to_string();
    decode_into(target, &mut merged, BufReader::new(file), default, &origin)?;

    let custom = custom_path(path);
    debug!(path = %custom.display(), "Trying custom configuration");
    let Ok(custom_file) = File::open(&custom) else {
        debug!(path = %path.display(), "Config loaded");
        return Ok(ConfigSource::Primary(path.to_path_buf()));
    };

    debug!(path = %custom.display(), "Reading custom configuration");
    let origin = custom.display().to_string();
    decode_into(target, &mut merged, BufReader::new(custom_file), default, &origin)?;
    debug!(path = %custom.display(), "Config loaded with custom config file");
    Ok(ConfigSource::Custom(custom))
}

/// One layer of the protocol. `merged` carries the YAML the target was last
/// decoded from; `None` means "serialize the target".
fn decode_into<T, R>(
    target: &mut T,
    merged: &mut Option<Value>,
    reader: R,
    default: Option<&T>,
    origin: &str,
) -> Result<(), ConfigError>
where
    T: Serialize + DeserializeOwned + Clone,
    R: Read,
{
    match decode_merged(target, merged.as_ref(), reader, origin) {
        Ok(Some((value, document))) => {
            *target = value;
            *merged = Some(document);
            Ok(())
        }
        Ok(None) => {
            debug!(origin, "Configuration document is null, nothing to apply");
            Ok(())
        }
        Err(err) => match default {
            Some(default) => {
                warn!(origin, error = %err, "Configuration incorrect, using default value");
                *target = default.clone();
                *merged = None;
                Ok(())
            }
            None => Err(err),
        },
    }
}

/// Build the merged value on the side so a failure never leaves `current`
/// half-written. `None` means the document was null.
fn decode_merged<T, R>(
    current: &T,
    merged: Option<&Value>,
    mut reader: R,
    origin: &str,
) -> Result<Option<(T, Value)>, ConfigError>
where
    T: Serialize + DeserializeOwned,
    R: Read,
{
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| ConfigError::Read { origin: origin.to_string(), source })?;

    let decode_err =
        |source: serde_yaml::Error| ConfigError::Decode { origin: origin.to_string(), source };

    let document = first_document(&content).map_err(decode_err)?;

    let mut base = match merged {
        Some(value) => value.clone(),
        None => serde_yaml::to_value(current).map_err(decode_err)?,
    };
    if !overlay_document(&mut base, document) {
        return Ok(None);
    }

    let value = serde_yaml::from_value(base.clone()).map_err(decode_err)?;
    Ok(Some((value, base)))
}

/// First document of a YAML stream. Blank lines and comments alone are not a
/// document.
fn first_document(content: &str) -> Result<Value, serde_yaml::Error> {
    let has_content = content
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with('#'));

    let document =
        if has_content { serde_yaml::Deserializer::from_str(content).next() } else { None };
    match document {
        Some(document) => Value::deserialize(document),
        None => {
            Err(<serde_yaml::Error as serde::de::Error>::custom("no YAML document in stream"))
        }
    }
}
