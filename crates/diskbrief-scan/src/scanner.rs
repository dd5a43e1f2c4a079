//! Walk-and-collect facade.

use std::time::Instant;

use diskbrief_core::{Collection, ScanConfig, ScanError};

use crate::collector::Collector;
use crate::probe::{AccessProbe, FileHandleProbe};
use crate::walker::walk;

/// Scanner that walks a root with jwalk and collects the files that pass the
/// size floor.
#[derive(Debug, Clone, Default)]
pub struct JwalkScanner<P = FileHandleProbe> {
    probe: P,
}

impl JwalkScanner<FileHandleProbe> {
    /// Create a scanner using the file-handle access probe.
    pub fn new() -> Self {
        Self {
            probe: FileHandleProbe,
        }
    }
}

impl<P: AccessProbe> JwalkScanner<P> {
    /// Create a scanner with a custom access probe.
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Perform a scan of the configured root.
    pub fn scan(&self, config: &ScanConfig) -> Result<Collection, ScanError> {
        let start = Instant::now();
        let entries = walk(config)?;

        let collection = Collector::new(config)
            .with_probe(&self.probe)
            .collect(entries);

        tracing::debug!(
            files = collection.len(),
            bytes = collection.total_size,
            warnings = collection.warnings.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan finished"
        );

        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ModifiedTimeOnly;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir1/subdir")).unwrap();

        fs::write(root.join("file1.txt"), vec![b'a'; 50]).unwrap();
        fs::write(root.join("dir1/file2.TXT"), vec![b'b'; 200]).unwrap();
        fs::write(root.join("dir1/subdir/file3.log"), vec![b'c'; 300]).unwrap();
        fs::write(root.join("dir1/subdir/tiny"), "x").unwrap();

        temp
    }

    fn config(root: &std::path::Path, min_size: u64) -> ScanConfig {
        ScanConfig::builder()
            .root(root)
            .min_size(min_size)
            .build()
            .unwrap()
    }

    #[test]
    fn test_basic_scan() {
        let temp = create_test_tree();
        let collection = JwalkScanner::new().scan(&config(temp.path(), 0)).unwrap();

        assert_eq!(collection.len(), 4);
        assert_eq!(collection.total_size, 551);
        assert!(!collection.has_warnings());
    }

    #[test]
    fn test_scan_applies_size_floor() {
        let temp = create_test_tree();
        let collection = JwalkScanner::with_probe(ModifiedTimeOnly)
            .scan(&config(temp.path(), 100))
            .unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.total_size, 500);
        assert_eq!(
            collection.size_by_directory[&temp.path().join("dir1")],
            200
        );
        assert_eq!(
            collection.size_by_directory[&temp.path().join("dir1/subdir")],
            300
        );
        assert!(!collection.size_by_directory.contains_key(&PathBuf::from(temp.path())));
    }

    #[test]
    fn test_scan_nothing_passes_floor() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("half.bin"), vec![0u8; 500_000]).unwrap();

        let collection = JwalkScanner::new()
            .scan(&ScanConfig::new(temp.path()))
            .unwrap();

        assert!(collection.is_empty());
        assert_eq!(collection.total_size, 0);
    }

    #[test]
    fn test_scan_records_have_timestamps() {
        let temp = create_test_tree();
        let collection = JwalkScanner::with_probe(ModifiedTimeOnly)
            .scan(&config(temp.path(), 0))
            .unwrap();

        assert!(collection.records.iter().all(|r| r.last_used.is_some()));
    }

    #[test]
    fn test_scan_missing_root() {
        let temp = TempDir::new().unwrap();
        let result = JwalkScanner::new().scan(&ScanConfig::new(temp.path().join("missing")));
        assert!(matches!(result, Err(ScanError::NotFound { .. })));
    }
}
