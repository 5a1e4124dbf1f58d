// src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::config::Config;
use crate::error::Result;
use std::io::{self, Write};

/// Scan, then print diagnostics for unreadable files followed by the report.
///
/// # Errors
/// Fails when the walk fails or stdout cannot be written.
pub fn run(config: &Config) -> Result<()> {
    let report = ext_lines_engine::run(config)?;

    let stderr = io::stderr();
    presentation::write_diagnostics(&report.errors, &mut stderr.lock())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    presentation::write_report(&report.totals, &mut out)?;
    out.flush()?;

    Ok(())
}
