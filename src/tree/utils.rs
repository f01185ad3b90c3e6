//! Shared helpers for tree walking

use std::ffi::OsStr;
use std::path::{Component, Path};

/// Name shown for a directory line.
///
/// Uses the last path component so trailing separators don't matter.
/// `.` and `..` are kept as written; a bare filesystem root gives an empty
/// name (so its line reads `/`).
pub fn display_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => lossy(name),
        Some(Component::CurDir) | None => ".".to_string(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::RootDir) | Some(Component::Prefix(_)) => String::new(),
    }
}

/// Convert a file name for output, replacing invalid UTF-8.
pub fn lossy(name: &OsStr) -> String {
    name.to_string_lossy().into_owned()
}
