//! Collected scan output and aggregate summary.

use std::collections::BTreeMap;
use std::path::PathBuf;

use compact_str::CompactString;

use crate::error::ScanWarning;
use crate::record::FileRecord;

/// Output of the collection stage: the filtered records in encounter order
/// plus the running totals accumulated while walking.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Records that passed the size floor, in traversal order.
    pub records: Vec<FileRecord>,
    /// Sum of all record sizes.
    pub total_size: u64,
    /// Size attributed to each file's immediate parent directory.
    pub size_by_directory: BTreeMap<PathBuf, u64>,
    /// Per-entry problems encountered during the walk.
    pub warnings: Vec<ScanWarning>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, updating the running totals.
    pub fn push(&mut self, record: FileRecord) {
        self.total_size += record.size;
        *self.size_by_directory.entry(record.directory()).or_default() += record.size;
        self.records.push(record);
    }

    /// Number of collected records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether no file passed the size floor.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if there were any warnings during the walk.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Aggregate result of one scan. Built once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Number of included files.
    pub total_file_count: usize,
    /// Sum of all included file sizes.
    pub total_size_bytes: u64,
    /// Included files, largest first. Equal sizes keep encounter order.
    pub files_by_size_descending: Vec<FileRecord>,
    /// Included files, least recently used first. Unknown times lead.
    pub files_by_last_used_ascending: Vec<FileRecord>,
    /// Number of files per extension.
    pub count_by_extension: BTreeMap<CompactString, u64>,
    /// Bytes per extension.
    pub size_by_extension: BTreeMap<CompactString, u64>,
    /// Bytes per immediate parent directory.
    pub size_by_directory: BTreeMap<PathBuf, u64>,
}
