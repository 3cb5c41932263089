//! heft - find the files actually eating your disk.
//!
//! Usage:
//!   heft [PATH] [THRESHOLD_MB]    Report files above the threshold
//!   heft --format json [PATH]     Emit the full report as JSON
//!   heft --help                   Show help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;

use heft_core::{DEFAULT_THRESHOLD_MB, ScanError, format_size};
use heft_scan::{ScanConfig, ScanReport, WalkScanner};

#[derive(Parser)]
#[command(
    name = "heft",
    version,
    about = "Find large files, skipping video and photo formats",
    long_about = "heft walks a directory tree and reports every file strictly \
                  larger than the size threshold, excluding common video and \
                  photo extensions, sorted by descending size."
)]
struct Cli {
    /// Directory to search (defaults to the current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Size threshold in megabytes
    #[arg(default_value_t = DEFAULT_THRESHOLD_MB, value_parser = clap::value_parser!(u64).range(1..))]
    threshold_mb: u64,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config = ScanConfig::builder()
        .root(cli.path)
        .threshold_mb(cli.threshold_mb)
        .build()
        .map_err(ScanError::from)?;

    let scanner = WalkScanner::new();

    match cli.format {
        OutputFormat::Text => {
            print_header(&config);
            let report = scanner.scan(&config);
            print_entries(&report);
        }
        OutputFormat::Json => {
            let report = scanner.scan(&config);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Print the report header.
fn print_header(config: &ScanConfig) {
    println!(
        "🔍 Searching for files larger than {}MB in: {}",
        config.threshold_mb,
        config.root.display()
    );
    println!("⏭️  Excluding video and photo files...");
    println!("{}", "─".repeat(50));
}

/// Print the sorted entries and the summary line.
fn print_entries(report: &ScanReport) {
    for entry in &report.entries {
        println!("{:>10}  {}", format_size(entry.size), entry.path.display());
    }
    println!("{}", "─".repeat(50));
    println!("✅ Found {} file(s) matching criteria", report.len());
}
