//! JWalk-based serial directory walker.

use std::path::Path;

use jwalk::{DirEntry, DirEntryIter, Parallelism, WalkDir};

use diskbrief_core::{ScanConfig, ScanError, ScanWarning, WalkEntry, WarningKind};

/// Start walking the configured root.
///
/// The root is checked up front: a missing, unreadable or non-directory root
/// is a fatal [`ScanError`]. Everything after that is reported per entry.
pub fn walk(config: &ScanConfig) -> Result<Walk, ScanError> {
    let root = &config.root;
    if root.as_os_str().is_empty() {
        return Err(ScanError::InvalidConfig {
            message: "Root path cannot be empty".to_string(),
        });
    }

    let metadata = std::fs::metadata(root).map_err(|e| ScanError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory { path: root.clone() });
    }

    // Opening the root here turns an unreadable root into a fatal error
    // instead of a single warning from the walker.
    std::fs::read_dir(root).map_err(|e| ScanError::io(root, e))?;

    let inner = WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .sort(true)
        .skip_hidden(false)
        .follow_links(config.follow_symlinks)
        .into_iter();

    tracing::debug!(root = %root.display(), "walk started");

    Ok(Walk { inner })
}

/// Iterator over the entries below a root.
///
/// Yields directories and regular files. Symlinks that are not followed and
/// other special files are skipped; broken symlinks and unreadable entries
/// come through as [`ScanWarning`]s.
pub struct Walk {
    inner: DirEntryIter<((), ())>,
}

impl Iterator for Walk {
    type Item = Result<WalkEntry, ScanWarning>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    let kind = match err.io_error().map(std::io::Error::kind) {
                        Some(std::io::ErrorKind::PermissionDenied) => WarningKind::PermissionDenied,
                        _ => WarningKind::ReadError,
                    };
                    return Some(Err(ScanWarning::new(path, err.to_string(), kind)));
                }
            };

            if let Some(item) = convert(&entry) {
                return Some(item);
            }
        }
    }
}

/// Convert a jwalk entry, or `None` for entries that are not reported.
fn convert(entry: &DirEntry<((), ())>) -> Option<Result<WalkEntry, ScanWarning>> {
    let path = entry.path();
    let file_type = entry.file_type();

    if file_type.is_symlink() {
        return broken_symlink(&path).map(Err);
    }
    if !file_type.is_dir() && !file_type.is_file() {
        return None;
    }

    let metadata = match entry.metadata() {
        Ok(m) => m,
        Err(err) => {
            return Some(Err(ScanWarning::new(
                path,
                err.to_string(),
                WarningKind::MetadataError,
            )));
        }
    };
    let modified = metadata.modified().ok();

    Some(Ok(if file_type.is_dir() {
        WalkEntry::directory(path, modified)
    } else {
        WalkEntry::file(path, metadata.len(), modified)
    }))
}

/// A warning for a symlink whose target does not resolve.
fn broken_symlink(path: &Path) -> Option<ScanWarning> {
    if path.exists() {
        return None;
    }
    let target = std::fs::read_link(path)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default();
    Some(ScanWarning::broken_symlink(path, &target))
}
