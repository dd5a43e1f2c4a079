//! Scan and report configuration types.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use derive_builder::Builder;

/// Default inclusion floor for files, in bytes.
pub const DEFAULT_MIN_SIZE: u64 = 1_000_000;

/// Default number of ranked entries per report section.
pub const DEFAULT_TOP_N: usize = 10;

/// Default staleness threshold, in days.
pub const DEFAULT_DAYS_UNUSED: u64 = 30;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Configuration for the walk and collection stages.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root directory to scan.
    pub root: PathBuf,

    /// Files smaller than this many bytes are excluded from every aggregate.
    #[builder(default = "DEFAULT_MIN_SIZE")]
    pub min_size: u64,

    /// Follow symbolic links while walking.
    #[builder(default = "false")]
    pub follow_symlinks: bool,
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                Err("Root path cannot be empty".to_string())
            }
            Some(_) => Ok(()),
            None => Err("Root path is required".to_string()),
        }
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a config for scanning a path with default settings.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            min_size: DEFAULT_MIN_SIZE,
            follow_symlinks: false,
        }
    }

    /// Check whether a file of `size` bytes passes the inclusion floor.
    pub fn includes_size(&self, size: u64) -> bool {
        size >= self.min_size
    }
}

/// Configuration for report generation.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ReportConfig {
    /// Number of ranked entries shown per section. Zero shows none.
    #[builder(default = "DEFAULT_TOP_N")]
    pub top_n: usize,

    /// Files not used within this many days count as unused.
    #[builder(default = "DEFAULT_DAYS_UNUSED")]
    pub days_unused: u64,

    /// Reference time for relative-time rendering and the unused cutoff.
    #[builder(default = "SystemTime::now()")]
    pub reference_time: SystemTime,
}

impl ReportConfig {
    /// Create a new config builder.
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// The instant before which a file counts as unused.
    ///
    /// Saturates at the epoch when the threshold reaches further back than
    /// the platform clock can represent.
    pub fn unused_cutoff(&self) -> SystemTime {
        let window = Duration::from_secs(self.days_unused.saturating_mul(SECS_PER_DAY));
        self.reference_time
            .checked_sub(window)
            .unwrap_or(SystemTime::UNIX_EPOCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_config_builder() {
        let config = ScanConfig::builder()
            .root("/home/user")
            .min_size(4096u64)
            .follow_symlinks(true)
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert_eq!(config.min_size, 4096);
        assert!(config.follow_symlinks);
    }

    #[test]
    fn test_scan_config_defaults() {
        let config = ScanConfig::builder().root(".").build().unwrap();
        assert_eq!(config.min_size, 1_000_000);
        assert!(!config.follow_symlinks);
    }

    #[test]
    fn test_empty_root_rejected() {
        let err = ScanConfig::builder().root("").build().unwrap_err();
        assert!(err.to_string().contains("Root path cannot be empty"));
    }

    #[test]
    fn test_missing_root_rejected() {
        assert!(ScanConfig::builder().build().is_err());
    }

    #[test]
    fn test_includes_size() {
        let config = ScanConfig::builder()
            .root("/test")
            .min_size(100u64)
            .build()
            .unwrap();

        assert!(config.includes_size(100));
        assert!(config.includes_size(101));
        assert!(!config.includes_size(99));
    }

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::builder().build().unwrap();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.days_unused, 30);
    }

    #[test]
    fn test_unused_cutoff() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(100 * SECS_PER_DAY);
        let config = ReportConfig::builder()
            .days_unused(30u64)
            .reference_time(now)
            .build()
            .unwrap();

        assert_eq!(
            config.unused_cutoff(),
            SystemTime::UNIX_EPOCH + Duration::from_secs(70 * SECS_PER_DAY)
        );
    }

    #[test]
    fn test_unused_cutoff_saturates() {
        let config = ReportConfig::builder()
            .days_unused(u64::MAX)
            .reference_time(SystemTime::UNIX_EPOCH + Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.unused_cutoff(), SystemTime::UNIX_EPOCH);
    }
}
