//! Scan configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default size threshold in megabytes.
pub const DEFAULT_THRESHOLD_MB: u64 = 100;

/// Configuration for one scan.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root path to search.
    pub root: PathBuf,

    /// Size threshold in megabytes; only strictly larger files are reported.
    #[builder(default = "DEFAULT_THRESHOLD_MB")]
    #[serde(default = "default_threshold_mb")]
    pub threshold_mb: u64,

    /// Include hidden files (starting with .).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// Follow symbolic links.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_true() -> bool {
    true
}

fn default_threshold_mb() -> u64 {
    DEFAULT_THRESHOLD_MB
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        if let Some(threshold_mb) = self.threshold_mb {
            if threshold_mb == 0 {
                return Err("Threshold must be at least 1MB".to_string());
            }
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a config with default settings for scanning a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            threshold_mb: DEFAULT_THRESHOLD_MB,
            include_hidden: true,
            follow_symlinks: false,
        }
    }

    /// The threshold converted to bytes (binary megabytes).
    pub fn threshold_bytes(&self) -> u64 {
        self.threshold_mb * 1024 * 1024
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
