//! Top-N views over a summary.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::SystemTime;

use itertools::Itertools;

use diskbrief_core::{FileRecord, ScanSummary};

/// The `top_n` largest files.
pub fn largest_files(summary: &ScanSummary, top_n: usize) -> &[FileRecord] {
    let end = top_n.min(summary.files_by_size_descending.len());
    &summary.files_by_size_descending[..end]
}

/// Up to `top_n` files last used strictly before `cutoff`, oldest first.
///
/// Files with an unknown last-used time count as the earliest possible time
/// and therefore always qualify.
pub fn unused_files(summary: &ScanSummary, cutoff: SystemTime, top_n: usize) -> Vec<&FileRecord> {
    summary
        .files_by_last_used_ascending
        .iter()
        .filter(|r| r.last_used.is_none_or(|t| t < cutoff))
        .take(top_n)
        .collect()
}

/// Rank a mapping's entries with `compare` applied to the values and keep the
/// first `top_n`.
///
/// The sort is stable over the map's key order, so entries `compare` treats
/// as equal come out in ascending key order.
pub fn rank_by<K, V, F>(map: &BTreeMap<K, V>, top_n: usize, mut compare: F) -> Vec<(&K, &V)>
where
    K: Ord,
    F: FnMut(&V, &V) -> Ordering,
{
    map.iter()
        .sorted_by(|a, b| compare(a.1, b.1))
        .take(top_n)
        .collect()
}

/// Rank a mapping by value, largest first, keeping the first `top_n`.
pub fn rank_by_value<K: Ord, V: Ord>(map: &BTreeMap<K, V>, top_n: usize) -> Vec<(&K, &V)> {
    rank_by(map, top_n, |a, b| b.cmp(a))
}
