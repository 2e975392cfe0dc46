//! Custom sibling path derivation

use std::path::{Path, PathBuf};

/// Marker inserted between the file stem and the extension.
pub const CUSTOM_MARKER: &str = "custom";

/// Path of the custom override file for `path`: `dir/name.ext` becomes
/// `dir/name.custom.ext`.
///
/// The extension is everything from the last `.` of the file name, so a dotfile
/// like `.env` becomes `.custom.env` and a name without a dot gets `name.custom`.
pub fn custom_path(path: &Path) -> PathBuf {
    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

    let custom_name = match file_name.rfind('.') {
        Some(dot) => {
            let (stem, ext) = file_name.split_at(dot);
            format!("{stem}.{CUSTOM_MARKER}{ext}")
        }
        None => format!("{file_name}.{CUSTOM_MARKER}"),
    };

    path.with_file_name(custom_name)
}
