//! Ranking and grouping of collected files for diskbrief.
//!
//! This crate turns a [`Collection`] into a [`ScanSummary`] and offers the
//! ranked views the report is built from:
//!
//! - **Size ranking** - largest files first, ties in encounter order
//! - **Recency ranking** - least recently used first, unknown times leading
//! - **Grouping** - file counts and byte totals per extension
//! - **Top-N** - a single helper ranking any grouped mapping by value
//!
//! No I/O happens here; everything operates on in-memory records.
//!
//! ```rust,ignore
//! use diskbrief_analyze::{Analyzer, rank_by_value};
//! use diskbrief_scan::{JwalkScanner, ScanConfig};
//!
//! let collection = JwalkScanner::new().scan(&ScanConfig::new("/data")).unwrap();
//! let summary = Analyzer::new().analyze(&collection);
//!
//! for (ext, count) in rank_by_value(&summary.count_by_extension, 5) {
//!     println!("{count} files - {ext}");
//! }
//! ```

mod analyzer;
mod ranking;

pub use analyzer::Analyzer;
pub use ranking::{largest_files, rank_by, rank_by_value, unused_files};

// Re-export core types
pub use diskbrief_core::{Collection, FileRecord, ScanSummary};
