//! Report sections and text rendering.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use diskbrief_analyze::{largest_files, rank_by_value, unused_files};
use diskbrief_core::{FileRecord, ReportConfig, ScanConfig, ScanSummary};

use crate::format::{format_relative_time, format_size};

/// Message printed instead of a report when no file passes the size floor.
pub const NO_FILES_FOUND: &str = "No files found matching the criteria.";

/// Line emitted by the unused section when no file qualifies.
pub const NO_UNUSED_FILES: &str = "No files found that haven't been used in this time period.";

/// A titled block of report lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<String>,
}

impl ReportSection {
    fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

/// Ordered report sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Find a section by title.
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Write the report as plain text.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "=== {} ===", section.title)?;
            for line in &section.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Builds report sections from a summary.
#[derive(Debug, Clone)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    /// Create a reporter.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Lines describing the run, printed ahead of the report. The last line
    /// is blank.
    pub fn preamble(&self, scan: &ScanConfig) -> Vec<String> {
        vec![
            format!("Analyzing files in: {}", scan.root.display()),
            format!("Showing top {} results", self.config.top_n),
            format!(
                "Considering files larger than {} as significant",
                format_size(scan.min_size)
            ),
            format!(
                "Considering files unused if not accessed in {} days",
                self.config.days_unused
            ),
            String::new(),
        ]
    }

    /// Build every section, in report order.
    pub fn build(&self, summary: &ScanSummary) -> Report {
        let top_n = self.config.top_n;

        Report {
            sections: vec![
                self.general(summary),
                self.largest(summary),
                self.unused(summary),
                ranked_section(
                    "File Extensions by Count",
                    &summary.count_by_extension,
                    top_n,
                    |ext, count| format!("{count} files - {ext}"),
                ),
                ranked_section(
                    "File Extensions by Size",
                    &summary.size_by_extension,
                    top_n,
                    |ext, size| format!("{} - {ext}", format_size(*size)),
                ),
                ranked_section(
                    format!("Top {top_n} Largest Directories"),
                    &summary.size_by_directory,
                    top_n,
                    |dir, size| format!("{} - {}", format_size(*size), dir.display()),
                ),
            ],
        }
    }

    fn general(&self, summary: &ScanSummary) -> ReportSection {
        ReportSection::new(
            "General Information",
            vec![
                format!("Total files analyzed: {}", summary.total_file_count),
                format!(
                    "Total size analyzed: {}",
                    format_size(summary.total_size_bytes)
                ),
            ],
        )
    }

    fn largest(&self, summary: &ScanSummary) -> ReportSection {
        let lines = largest_files(summary, self.config.top_n)
            .iter()
            .map(|r| self.file_line(r))
            .collect();
        ReportSection::new(format!("Top {} Largest Files", self.config.top_n), lines)
    }

    fn unused(&self, summary: &ScanSummary) -> ReportSection {
        let cutoff = self.config.unused_cutoff();
        let mut lines: Vec<String> = unused_files(summary, cutoff, self.config.top_n)
            .into_iter()
            .map(|r| self.file_line(r))
            .collect();
        if lines.is_empty() {
            lines.push(NO_UNUSED_FILES.to_string());
        }

        ReportSection::new(
            format!(
                "Top {} Oldest/Unused Files (not accessed in {} days)",
                self.config.top_n, self.config.days_unused
            ),
            lines,
        )
    }

    fn file_line(&self, record: &FileRecord) -> String {
        format!(
            "{} - {} (Last used: {})",
            format_size(record.size),
            record.path.display(),
            format_relative_time(record.last_used, self.config.reference_time)
        )
    }
}

/// Rank a grouped mapping by value and render its top entries.
fn ranked_section<K, V, F>(
    title: impl Into<String>,
    map: &BTreeMap<K, V>,
    top_n: usize,
    render: F,
) -> ReportSection
where
    K: Ord,
    V: Ord,
    F: Fn(&K, &V) -> String,
{
    let lines = rank_by_value(map, top_n)
        .into_iter()
        .map(|(key, value)| render(key, value))
        .collect();
    ReportSection::new(title, lines)
}
