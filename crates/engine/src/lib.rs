// crates/engine/src/lib.rs
pub mod aggregate;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::processor::FsLineCounter;
use crate::stats::ScanReport;

/// Walk the configured root and total its lines per extension.
///
/// Per-file failures are collected in `ScanReport::errors` and never abort
/// the run.
///
/// # Errors
///
/// Returns an error only when the directory walk itself fails.
pub fn run(config: &Config) -> Result<ScanReport> {
    let files = filesystem::walk(&config.root)?;
    let report = aggregate::aggregate(files, &FsLineCounter);

    log::info!(
        "{} files walked, {} extensions, {} unreadable, {} without extension",
        report.files,
        report.totals.len(),
        report.errors.len(),
        report.skipped
    );

    Ok(report)
}
