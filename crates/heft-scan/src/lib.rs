//! Directory traversal engine for heft.
//!
//! This crate walks a directory tree and produces a [`ScanReport`] of the
//! files strictly larger than the configured threshold whose extension is
//! not a known media type, sorted by descending size.
//!
//! Traversal is best-effort: entries that cannot be read are skipped and
//! recorded as warnings rather than failing the scan, and a missing root
//! simply produces an empty report.
//!
//! # Example
//!
//! ```rust,no_run
//! use heft_scan::{ScanConfig, WalkScanner};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let report = WalkScanner::new().scan(&config);
//!
//! for entry in &report.entries {
//!     println!("{}  {}", entry.size, entry.path.display());
//! }
//! ```

mod scanner;

pub use scanner::WalkScanner;

// Re-export core types for convenience
pub use heft_core::{
    FileEntry, ScanConfig, ScanError, ScanReport, ScanStats, ScanWarning, WarningKind,
};
