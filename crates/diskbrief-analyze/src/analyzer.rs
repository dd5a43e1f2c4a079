//! Summary construction from collected records.

use std::collections::BTreeMap;

use compact_str::CompactString;

use diskbrief_core::{Collection, FileRecord, ScanSummary};

/// Builds a [`ScanSummary`] from a collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer;

impl Analyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Rank and group the collected records.
    ///
    /// Both rankings use stable sorts, so records with equal keys stay in the
    /// order the walker encountered them.
    pub fn analyze(&self, collection: &Collection) -> ScanSummary {
        let mut by_size = collection.records.clone();
        by_size.sort_by(|a, b| b.size.cmp(&a.size));

        let mut by_last_used = collection.records.clone();
        by_last_used.sort_by_key(|r| r.last_used);

        let (count_by_extension, size_by_extension) = group_by_extension(&collection.records);

        tracing::debug!(
            files = collection.records.len(),
            extensions = count_by_extension.len(),
            directories = collection.size_by_directory.len(),
            "analysis finished"
        );

        ScanSummary {
            total_file_count: collection.records.len(),
            total_size_bytes: collection.total_size,
            files_by_size_descending: by_size,
            files_by_last_used_ascending: by_last_used,
            count_by_extension,
            size_by_extension,
            size_by_directory: collection.size_by_directory.clone(),
        }
    }
}

/// Single pass over the records accumulating count and bytes per extension.
fn group_by_extension(
    records: &[FileRecord],
) -> (BTreeMap<CompactString, u64>, BTreeMap<CompactString, u64>) {
    let mut counts: BTreeMap<CompactString, u64> = BTreeMap::new();
    let mut sizes: BTreeMap<CompactString, u64> = BTreeMap::new();

    for record in records {
        *counts.entry(record.extension.clone()).or_default() += 1;
        *sizes.entry(record.extension.clone()).or_default() += record.size;
    }

    (counts, sizes)
}
