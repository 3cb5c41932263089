//! Serial jwalk-based directory scanner.

use std::time::Instant;

use jwalk::{Parallelism, WalkDir};

use heft_core::{FileEntry, ScanConfig, ScanReport, ScanStats, ScanWarning, is_media_file};

/// Scanner that walks the tree sequentially, filtering as it goes.
pub struct WalkScanner;

impl WalkScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Walk `config.root` and collect every file strictly larger than the
    /// threshold whose extension is not a known media type.
    ///
    /// This never fails: unreadable entries are skipped and recorded as
    /// warnings, and a missing or non-directory root yields an empty
    /// report.
    pub fn scan(&self, config: &ScanConfig) -> ScanReport {
        let start = Instant::now();
        let threshold_bytes = config.threshold_bytes();

        let mut entries = Vec::new();
        let mut stats = ScanStats::new();
        let mut warnings = Vec::new();

        let walker = WalkDir::new(&config.root)
            .parallelism(Parallelism::Serial)
            .skip_hidden(!config.include_hidden)
            .follow_links(config.follow_symlinks);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    warnings.push(ScanWarning::read_error(path, err.to_string()));
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                stats.record_dir();
                continue;
            }
            if !file_type.is_file() {
                // Symlinks, sockets, devices: nothing to size.
                continue;
            }
            if entry.depth() == 0 {
                // A root that is itself a file yields nothing, matching
                // permissive walk semantics.
                continue;
            }

            let path = entry.path();
            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(err) => {
                    warnings.push(ScanWarning::metadata_error(&path, err.to_string()));
                    continue;
                }
            };

            let size = metadata.len();
            stats.record_file(size);

            // Strictly larger than the threshold.
            if size <= threshold_bytes {
                stats.record_below_threshold();
                continue;
            }
            if is_media_file(&path) {
                stats.record_media_excluded();
                continue;
            }

            entries.push(FileEntry::new(path, size));
        }

        // Largest first; ties keep traversal order.
        entries.sort_by(|a, b| b.size.cmp(&a.size));

        let scan_duration = start.elapsed();
        tracing::debug!(
            root = %config.root.display(),
            files = stats.files_seen,
            dirs = stats.dirs_seen,
            retained = entries.len(),
            warnings = warnings.len(),
            elapsed_ms = scan_duration.as_millis() as u64,
            "scan complete"
        );

        ScanReport::new(config.clone(), entries, stats, scan_duration, warnings)
    }
}

impl Default for WalkScanner {
    fn default() -> Self {
        Self::new()
    }
}
