//! Human-readable size formatting.

/// Format a byte count with one decimal digit and a unit suffix.
///
/// Divides by 1024 through B, KB, MB and GB, stopping at the first unit
/// where the scaled value is below 1024; anything larger renders as TB.
/// The suffix is attached without a space: `0.0B`, `1.5KB`, `153.2MB`.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{size:.1}{unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1}TB")
}
