//! Size filtering and running totals over walked entries.

use diskbrief_core::{Collection, FileRecord, ScanConfig, ScanWarning, WalkEntry};

use crate::probe::{AccessProbe, FileHandleProbe};

/// Turns walked entries into a [`Collection`].
///
/// Directories never become records. Files below the size floor are dropped
/// before any total sees them. Warnings are logged and kept, and the walk
/// carries on.
#[derive(Debug, Clone)]
pub struct Collector<'a, P = FileHandleProbe> {
    config: &'a ScanConfig,
    probe: P,
}

impl<'a> Collector<'a, FileHandleProbe> {
    /// Create a collector for `config` using the file-handle access probe.
    pub fn new(config: &'a ScanConfig) -> Self {
        Self {
            config,
            probe: FileHandleProbe,
        }
    }
}

impl<'a, P: AccessProbe> Collector<'a, P> {
    /// Swap in a different access probe.
    pub fn with_probe<Q: AccessProbe>(self, probe: Q) -> Collector<'a, Q> {
        Collector {
            config: self.config,
            probe,
        }
    }

    /// Consume entries in traversal order.
    pub fn collect<I>(&self, entries: I) -> Collection
    where
        I: IntoIterator<Item = Result<WalkEntry, ScanWarning>>,
    {
        let mut collection = Collection::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(warning) => {
                    tracing::warn!("{warning}");
                    collection.warnings.push(warning);
                    continue;
                }
            };

            if entry.is_dir || !self.config.includes_size(entry.size) {
                continue;
            }

            let last_used = self.probe.last_access(&entry.path).or(entry.modified);
            collection.push(FileRecord::new(entry.path, entry.size, last_used));
        }

        collection
    }
}
