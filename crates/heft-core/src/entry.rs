//! Report entry and summary types.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ScanConfig;
use crate::error::ScanWarning;

/// A single file retained by a scan: its path and size in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path to the file, rooted at the scanned directory.
    pub path: PathBuf,

    /// Size in bytes.
    pub size: u64,
}

impl FileEntry {
    /// Create a new entry.
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

/// Counters accumulated over one traversal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Regular files whose size was read.
    pub files_seen: u64,
    /// Directories visited.
    pub dirs_seen: u64,
    /// Total bytes across all sized files.
    pub bytes_seen: u64,
    /// Files above the threshold dropped for having a media extension.
    pub media_excluded: u64,
    /// Files at or below the threshold.
    pub below_threshold: u64,
}

impl ScanStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sized regular file.
    pub fn record_file(&mut self, size: u64) {
        self.files_seen += 1;
        self.bytes_seen += size;
    }

    /// Record a visited directory.
    pub fn record_dir(&mut self) {
        self.dirs_seen += 1;
    }

    /// Record a file dropped by the media-extension filter.
    pub fn record_media_excluded(&mut self) {
        self.media_excluded += 1;
    }

    /// Record a file at or below the threshold.
    pub fn record_below_threshold(&mut self) {
        self.below_threshold += 1;
    }
}

/// Outcome of one scan.
///
/// Invariant: `entries` is sorted by descending size — for every adjacent
/// pair, the earlier entry's size is >= the later entry's size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Configuration the scan ran with.
    pub config: ScanConfig,

    /// Retained entries, largest first.
    pub entries: Vec<FileEntry>,

    /// Traversal counters.
    pub stats: ScanStats,

    /// Wall-clock duration of the traversal.
    pub scan_duration: Duration,

    /// Entries dropped because they could not be read.
    pub warnings: Vec<ScanWarning>,
}

impl ScanReport {
    /// Create a new report.
    pub fn new(
        config: ScanConfig,
        entries: Vec<FileEntry>,
        stats: ScanStats,
        scan_duration: Duration,
        warnings: Vec<ScanWarning>,
    ) -> Self {
        Self {
            config,
            entries,
            stats,
            scan_duration,
            warnings,
        }
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scan retained nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_recording() {
        let mut stats = ScanStats::new();
        stats.record_file(1024);
        stats.record_file(2048);
        stats.record_dir();
        stats.record_media_excluded();
        stats.record_below_threshold();

        assert_eq!(stats.files_seen, 2);
        assert_eq!(stats.bytes_seen, 3072);
        assert_eq!(stats.dirs_seen, 1);
        assert_eq!(stats.media_excluded, 1);
        assert_eq!(stats.below_threshold, 1);
    }

    #[test]
    fn test_report_len() {
        let report = ScanReport::new(
            ScanConfig::new("/test"),
            vec![
                FileEntry::new("/test/a.bin", 300),
                FileEntry::new("/test/b.bin", 200),
            ],
            ScanStats::new(),
            Duration::ZERO,
            Vec::new(),
        );

        assert_eq!(report.len(), 2);
        assert!(!report.is_empty());
    }
}
