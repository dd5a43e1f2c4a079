//! Best-effort last-access time lookup.

use std::fs::File;
use std::path::Path;
use std::time::SystemTime;

/// Looks up when a file was last accessed.
///
/// Returning `None` is not an error: callers fall back to the modification
/// time. Access-time semantics differ across platforms and mount options, so
/// the result is an approximation at best.
pub trait AccessProbe {
    /// Best-effort last access time for `path`.
    fn last_access(&self, path: &Path) -> Option<SystemTime>;
}

impl<P: AccessProbe + ?Sized> AccessProbe for &P {
    fn last_access(&self, path: &Path) -> Option<SystemTime> {
        (**self).last_access(path)
    }
}

/// Probe that opens the file and reads the access time from the open handle.
///
/// The handle is dropped before returning on every path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileHandleProbe;

impl AccessProbe for FileHandleProbe {
    fn last_access(&self, path: &Path) -> Option<SystemTime> {
        let file = File::open(path).ok()?;
        file.metadata().ok()?.accessed().ok()
    }
}

/// Probe that never reports an access time, so every record uses its
/// modification time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiedTimeOnly;

impl AccessProbe for ModifiedTimeOnly {
    fn last_access(&self, _path: &Path) -> Option<SystemTime> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn test_file_handle_probe_reads_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("probe.txt");
        std::fs::write(&path, "x").unwrap();

        let accessed = FileHandleProbe.last_access(&path);
        assert!(accessed.is_some());
        assert!(accessed.unwrap() <= SystemTime::now());
    }

    #[test]
    fn test_file_handle_probe_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(FileHandleProbe.last_access(&temp.path().join("missing")).is_none());
    }

    #[test]
    fn test_modified_time_only() {
        assert!(ModifiedTimeOnly.last_access(Path::new("/anything")).is_none());
    }

    #[test]
    fn test_probe_by_reference() {
        let probe = ModifiedTimeOnly;
        let by_ref: &dyn AccessProbe = &probe;
        assert!((&by_ref).last_access(Path::new("/x")).is_none());
    }
}
