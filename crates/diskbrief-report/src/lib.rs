//! Plain-text report rendering for diskbrief.
//!
//! Turns a [`ScanSummary`] into ordered, titled sections of formatted lines:
//! general totals, largest files, unused files, extensions by count and by
//! size, and largest directories.

mod format;
mod report;

pub use format::{format_relative_time, format_size};
pub use report::{NO_FILES_FOUND, NO_UNUSED_FILES, Report, ReportSection, Reporter};

// Re-export core types
pub use diskbrief_core::{ReportConfig, ScanSummary};
