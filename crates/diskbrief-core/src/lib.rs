//! Core types and configuration for diskbrief.
//!
//! This crate provides the data model shared by the scan, analyze and report
//! stages: per-file records, the collected scan output, the aggregate
//! summary, configuration and error types.

mod config;
mod error;
mod record;
mod summary;

pub use config::{ReportConfig, ReportConfigBuilder, ScanConfig, ScanConfigBuilder};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use record::{FileRecord, NO_EXTENSION, WalkEntry, directory_of, extension_of};
pub use summary::{Collection, ScanSummary};
