//! diskbrief - Report the largest, stalest and bulkiest files under a directory.
//!
//! Usage:
//!   diskbrief [-dir PATH] [-top N] [-min-size BYTES] [-days-unused DAYS]
//!
//! Flags may be written with one dash or two (`-top 5`, `--top=5`).

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use diskbrief_analyze::Analyzer;
use diskbrief_core::{ReportConfig, ScanConfig};
use diskbrief_report::{NO_FILES_FOUND, Reporter};
use diskbrief_scan::JwalkScanner;

/// Long flags that also accept the single-dash spelling.
const LEGACY_FLAGS: &[&str] = &["dir", "top", "min-size", "days-unused", "help"];

#[derive(Parser)]
#[command(
    name = "diskbrief",
    version,
    about = "Report the largest, stalest and bulkiest files under a directory",
    long_about = "diskbrief walks a directory tree once and reports the largest files, \
                  the least recently used files, totals per extension and the largest \
                  directories.\n\nFiles below the minimum size are left out of every total."
)]
struct Cli {
    /// Directory to analyze
    #[arg(long, default_value = ".")]
    dir: String,

    /// Number of top items to show
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Minimum file size to consider (in bytes)
    #[arg(long = "min-size", default_value_t = 1_000_000)]
    min_size: u64,

    /// Consider files unused if not accessed in this many days
    #[arg(long = "days-unused", default_value_t = 30)]
    days_unused: u64,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    let scan_config = ScanConfig::builder()
        .root(cli.dir)
        .min_size(cli.min_size)
        .build()
        .wrap_err("Invalid directory")?;
    let report_config = ReportConfig::builder()
        .top_n(cli.top)
        .days_unused(cli.days_unused)
        .build()
        .wrap_err("Invalid report settings")?;

    run(&scan_config, report_config)
}

/// Walk, collect, analyze and print the report.
fn run(scan_config: &ScanConfig, report_config: ReportConfig) -> Result<()> {
    let collection = JwalkScanner::new()
        .scan(scan_config)
        .wrap_err("Error walking directory")?;

    let reporter = Reporter::new(report_config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in reporter.preamble(scan_config) {
        writeln!(out, "{line}")?;
    }

    if collection.is_empty() {
        writeln!(out, "{NO_FILES_FOUND}")?;
    } else {
        let summary = Analyzer::new().analyze(&collection);
        reporter.build(&summary).write_to(&mut out)?;
    }
    out.flush()?;

    if collection.has_warnings() {
        eprintln!();
        eprintln!("{} warning(s) during scan", collection.warnings.len());
    }

    Ok(())
}

/// Log to stderr, `warn` and above unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Rewrite single-dash long flags (`-dir`, `-top=5`) to their double-dash form.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) if is_legacy_flag(s) => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

fn is_legacy_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LEGACY_FLAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().map(OsString::from))
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_single_dash_flags_rewritten() {
        assert_eq!(
            normalized(&["diskbrief", "-dir", "/tmp", "-top=3", "-min-size", "0"]),
            vec!["diskbrief", "--dir", "/tmp", "--top=3", "--min-size", "0"]
        );
    }

    #[test]
    fn test_other_args_untouched() {
        assert_eq!(
            normalized(&["diskbrief", "--days-unused", "7", "-V", "-dirt", "-"]),
            vec!["diskbrief", "--days-unused", "7", "-V", "-dirt", "-"]
        );
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["diskbrief"]);
        assert_eq!(cli.dir, ".");
        assert_eq!(cli.top, 10);
        assert_eq!(cli.min_size, 1_000_000);
        assert_eq!(cli.days_unused, 30);
    }

    #[test]
    fn test_cli_legacy_spelling_parses() {
        let cli = Cli::parse_from(normalize_args(
            ["diskbrief", "-dir", "/srv", "-top", "3", "-days-unused=90"]
                .into_iter()
                .map(OsString::from),
        ));
        assert_eq!(cli.dir, "/srv");
        assert_eq!(cli.top, 3);
        assert_eq!(cli.days_unused, 90);
    }

    #[test]
    fn test_cli_rejects_negative_top() {
        assert!(Cli::try_parse_from(["diskbrief", "--top", "-1"]).is_err());
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
