//! Decode-over-existing overlay for YAML documents
//!
//! A source document is applied onto the serialized form of the current target:
//! mappings merge key by key, every other value replaces what was there. Keys the
//! source does not mention keep their prior values.

use serde_yaml::Value;

/// Apply a whole source document onto `base`.
///
/// A null document (a bare `~`) carries no fields and leaves `base` untouched.
/// Returns `false` in that case.
pub fn overlay_document(base: &mut Value, document: Value) -> bool {
    if document.is_null() {
        return false;
    }
    overlay(base, document);
    true
}

/// Recursively overlay `value` onto `base`.
pub fn overlay(base: &mut Value, value: Value) {
    match value {
        Value::Mapping(incoming) => match base {
            Value::Mapping(existing) => {
                for (key, value) in incoming {
                    match existing.get_mut(&key) {
                        Some(slot) => overlay(slot, value),
                        None => {
                            existing.insert(key, value);
                        }
                    }
                }
            }
            slot => *slot = Value::Mapping(incoming),
        },
        other => *base = other,
    }
}
