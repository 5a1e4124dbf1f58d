// src/presentation.rs
use ext_lines_engine::error::EngineError;
use ext_lines_engine::stats::ExtensionTotals;
use std::io::{self, Write};
use std::path::PathBuf;

pub const HEADER: &str = "Extensions";

/// Write the `Extensions` header and one `<extension> <lines>` row per key,
/// in first-encounter order.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_report<W: Write>(totals: &ExtensionTotals, out: &mut W) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for (ext, lines) in totals.iter() {
        writeln!(out, "{} {lines}", ext.to_string_lossy())?;
    }
    Ok(())
}

/// One `Could not open file <path>` line per file that failed to count.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_diagnostics<W: Write>(errors: &[(PathBuf, EngineError)], out: &mut W) -> io::Result<()> {
    for (path, _) in errors {
        writeln!(out, "Could not open file {}", path.display())?;
    }
    Ok(())
}
