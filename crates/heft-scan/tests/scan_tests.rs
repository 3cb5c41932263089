use std::fs;
use std::path::Path;

use heft_scan::{ScanConfig, WalkScanner};
use tempfile::TempDir;

const MIB: usize = 1024 * 1024;

fn write_file(path: &Path, len: usize) {
    fs::write(path, vec![0u8; len]).unwrap();
}

fn scan_with_threshold(root: &Path, threshold_mb: u64) -> heft_scan::ScanReport {
    let config = ScanConfig::builder()
        .root(root)
        .threshold_mb(threshold_mb)
        .build()
        .unwrap();
    WalkScanner::new().scan(&config)
}

#[test]
fn test_end_to_end_mixed_directory() {
    // big.txt above threshold, movie.mp4 above threshold but media,
    // small.txt below threshold: only big.txt survives.
    let temp = TempDir::new().unwrap();
    write_file(&temp.path().join("big.txt"), 4 * MIB);
    write_file(&temp.path().join("movie.mp4"), 8 * MIB);
    write_file(&temp.path().join("small.txt"), 16 * 1024);

    let report = scan_with_threshold(temp.path(), 2);

    assert_eq!(report.len(), 1);
    assert!(report.entries[0].path.ends_with("big.txt"));
    assert_eq!(report.entries[0].size, 4 * MIB as u64);
}

#[test]
fn test_end_to_end_empty_directory() {
    let temp = TempDir::new().unwrap();

    let report = scan_with_threshold(temp.path(), 1);

    assert!(report.is_empty());
    assert_eq!(report.stats.files_seen, 0);
}

#[test]
fn test_end_to_end_only_excluded_and_small_files() {
    let temp = TempDir::new().unwrap();
    write_file(&temp.path().join("clip.webm"), 3 * MIB);
    write_file(&temp.path().join("frame.heic"), 3 * MIB);
    write_file(&temp.path().join("tiny.log"), 100);

    let report = scan_with_threshold(temp.path(), 1);

    assert!(report.is_empty());
    assert_eq!(report.stats.media_excluded, 2);
    assert_eq!(report.stats.below_threshold, 1);
}

#[test]
fn test_recursion_into_nested_directories() {
    let temp = TempDir::new().unwrap();
    let deep = temp.path().join("a/b/c");
    fs::create_dir_all(&deep).unwrap();
    write_file(&deep.join("buried.bin"), 2 * MIB);
    write_file(&temp.path().join("top.bin"), 3 * MIB);

    let report = scan_with_threshold(temp.path(), 1);

    assert_eq!(report.len(), 2);
    assert!(report.entries[0].path.ends_with("top.bin"));
    assert!(report.entries[1].path.ends_with("a/b/c/buried.bin"));
    assert!(report.stats.dirs_seen >= 3);
}

#[test]
fn test_each_file_appears_exactly_once() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    write_file(&temp.path().join("one.bin"), 2 * MIB);
    write_file(&temp.path().join("sub/two.bin"), 2 * MIB);

    let report = scan_with_threshold(temp.path(), 1);

    assert_eq!(report.len(), 2);
    let mut paths: Vec<_> = report.entries.iter().map(|e| e.path.clone()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 2);
}
