use crate::processor::LineCounter;
use crate::stats::ScanReport;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Grouping key for a path: everything from the first `.` in the whole path
/// string to the end.
///
/// This is not the usual basename suffix. `a.b/c.txt` maps to `.b/c.txt`,
/// and a dot in any parent directory decides the key for every file below it.
/// Returns `None` when the path has no `.` at all.
///
/// Works on the raw path bytes, so paths that are not valid UTF-8 keep
/// distinct keys.
#[must_use]
pub fn extension_key<P: AsRef<OsStr> + ?Sized>(path: &P) -> Option<&OsStr> {
    let bytes = path.as_ref().as_encoded_bytes();
    let dot = bytes.iter().position(|&b| b == b'.')?;
    // SAFETY: the split sits immediately before `.`, a valid non-empty UTF-8
    // substring, and the bytes come from `as_encoded_bytes` above.
    Some(unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[dot..]) })
}

/// Count every file and fold the results into per-extension totals.
///
/// Files without a `.` are skipped without a diagnostic. A file the counter
/// fails on is recorded in [`ScanReport::errors`] and never touches a total.
pub fn aggregate<C>(files: impl IntoIterator<Item = PathBuf>, counter: &C) -> ScanReport
where
    C: LineCounter + ?Sized,
{
    let mut report = ScanReport::default();

    for path in files {
        report.files += 1;

        let Some(key) = extension_key(&path) else {
            report.skipped += 1;
            continue;
        };

        match counter.count_lines(&path) {
            Ok(lines) => {
                log::trace!("{}: {lines} lines", path.display());
                report.totals.add(key, lines);
            }
            Err(e) => {
                log::debug!("{e}");
                report.errors.push((path.clone(), e));
            }
        }
    }

    report
}
