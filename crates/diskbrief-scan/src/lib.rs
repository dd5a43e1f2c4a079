//! Directory walking and file collection for diskbrief.
//!
//! This crate turns a root directory into a [`Collection`]: the files that
//! pass the size floor, in traversal order, with their total size and the
//! size attributed to each parent directory.
//!
//! # Overview
//!
//! - **Walker** enumerates entries with jwalk, serially and sorted by name so
//!   that encounter order is deterministic.
//! - **Access probe** looks up a best-effort last-access time, falling back
//!   to the modification time.
//! - **Collector** filters by size, normalizes extensions and keeps the
//!   running totals. Per-entry failures become warnings, never errors.
//!
//! # Example
//!
//! ```rust,no_run
//! use diskbrief_scan::{JwalkScanner, ScanConfig};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let collection = JwalkScanner::new().scan(&config).unwrap();
//!
//! println!("{} files, {} bytes", collection.len(), collection.total_size);
//! ```

mod collector;
mod probe;
mod scanner;
mod walker;

pub use collector::Collector;
pub use probe::{AccessProbe, FileHandleProbe, ModifiedTimeOnly};
pub use scanner::JwalkScanner;
pub use walker::{Walk, walk};

// Re-export core types for convenience
pub use diskbrief_core::{
    Collection, FileRecord, ScanConfig, ScanError, ScanWarning, WalkEntry, WarningKind,
};
