use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Source of per-file line counts used by the aggregator.
pub trait LineCounter {
    /// Count the lines of the file at `path`.
    ///
    /// # Errors
    /// Returns an error when the file cannot be opened or read.
    fn count_lines(&self, path: &Path) -> Result<usize>;
}

/// Counts lines by reading files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLineCounter;

impl LineCounter for FsLineCounter {
    fn count_lines(&self, path: &Path) -> Result<usize> {
        count_lines(path)
    }
}

/// Count the lines of a single file.
///
/// The file is read as raw bytes. Every `\n` ends a line, and a trailing
/// fragment without a final `\n` is one more line. An empty file has 0 lines.
///
/// # Errors
/// `EngineError::FileRead` if the file is missing, is a directory, or cannot
/// be read.
pub fn count_lines(path: &Path) -> Result<usize> {
    let read_err = |source: std::io::Error| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    count_lines_in(BufReader::new(file)).map_err(read_err)
}

fn count_lines_in<R: BufRead>(mut reader: R) -> std::io::Result<usize> {
    let mut lines = 0;
    let mut last_byte: Option<u8> = None;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        lines += bytecount::count(buf, b'\n');
        last_byte = buf.last().copied();

        let len = buf.len();
        reader.consume(len);
    }

    // 末尾に改行がない場合の行カウント補正
    if last_byte.is_some_and(|b| b != b'\n') {
        lines += 1;
    }

    Ok(lines)
}
