use std::fs::File;
use std::io::Read;
use std::path::Path;

use memchr::Memchr;

use crate::error::{EngineError, Result};
use crate::stats::{FileReport, Violation};

/// Byte lengths of the `\n`-separated segments of `content`.
///
/// Nothing besides the `\n` itself is stripped, so a CRLF line counts its
/// `\r`. Content ending in `\n` yields a trailing empty segment and empty
/// content yields a single empty segment.
pub struct LineLengths<'a> {
    newlines: Memchr<'a>,
    len: usize,
    start: usize,
    done: bool,
}

impl Iterator for LineLengths<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }
        match self.newlines.next() {
            Some(end) => {
                let length = end - self.start;
                self.start = end + 1;
                Some(length)
            }
            None => {
                self.done = true;
                Some(self.len - self.start)
            }
        }
    }
}

pub fn line_lengths(content: &[u8]) -> LineLengths<'_> {
    LineLengths {
        newlines: memchr::memchr_iter(b'\n', content),
        len: content.len(),
        start: 0,
        done: false,
    }
}

/// Line numbers and lengths of every segment longer than `max_len` bytes.
pub fn long_lines(content: &[u8], max_len: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    line_lengths(content)
        .enumerate()
        .filter(move |&(_, length)| length > max_len)
        .map(|(index, length)| (index + 1, length))
}

/// Read `path` in full and report its over-long lines.
///
/// The file handle is closed before the content is scanned.
pub fn scan_file(path: &Path, max_len: usize) -> Result<FileReport> {
    let content = read_to_end(path)?;

    let lines = line_lengths(&content).count();
    let violations: Vec<Violation> = long_lines(&content, max_len)
        .map(|(line, length)| Violation {
            path: path.to_path_buf(),
            line,
            length,
        })
        .collect();

    tracing::debug!(path = %path.display(), lines, violations = violations.len(), "scanned file");

    Ok(FileReport {
        path: path.to_path_buf(),
        lines,
        violations,
    })
}

fn read_to_end(path: &Path) -> Result<Vec<u8>> {
    let file_read = |source: std::io::Error| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(file_read)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).map_err(file_read)?;
    Ok(buf)
}
