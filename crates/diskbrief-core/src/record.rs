//! Per-file record types.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use compact_str::CompactString;

/// Extension key used for files whose name carries no suffix.
pub const NO_EXTENSION: &str = "no_extension";

/// A raw filesystem entry as yielded by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path joined onto the scan root as given.
    pub path: PathBuf,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Size in bytes (zero for directories).
    pub size: u64,
    /// Last modification time, if the platform reports one.
    pub modified: Option<SystemTime>,
}

impl WalkEntry {
    /// Create a regular file entry.
    pub fn file(path: impl Into<PathBuf>, size: u64, modified: Option<SystemTime>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
            size,
            modified,
        }
    }

    /// Create a directory entry.
    pub fn directory(path: impl Into<PathBuf>, modified: Option<SystemTime>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
            size: 0,
            modified,
        }
    }
}

/// One observed file that passed the size floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Full path of the file, unique within a scan.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Lower-cased extension, or [`NO_EXTENSION`].
    pub extension: CompactString,
    /// Best-available last access time. `None` when unknown.
    pub last_used: Option<SystemTime>,
}

impl FileRecord {
    /// Create a record, deriving the extension from the path.
    pub fn new(path: impl Into<PathBuf>, size: u64, last_used: Option<SystemTime>) -> Self {
        let path = path.into();
        let extension = extension_of(&path);
        Self {
            path,
            size,
            extension,
            last_used,
        }
    }

    /// The directory this file's size is attributed to.
    pub fn directory(&self) -> PathBuf {
        directory_of(&self.path)
    }
}

/// Extract the normalized extension of a path.
///
/// Only the final path component is inspected. The suffix after the last `.`
/// is lower-cased; an absent or empty suffix maps to [`NO_EXTENSION`].
pub fn extension_of(path: &Path) -> CompactString {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => CompactString::new(ext.to_lowercase()),
        _ => CompactString::const_new(NO_EXTENSION),
    }
}

/// The immediate parent directory of a path. Bare file names belong to `.`.
pub fn directory_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
