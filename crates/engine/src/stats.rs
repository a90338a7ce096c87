use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::error::EngineError;

/// A single line longer than the configured maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    /// 1-based.
    pub line: usize,
    /// Length in bytes, including a trailing `\r` if present.
    pub length: usize,
}

/// Outcome of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub lines: usize,
    pub violations: Vec<Violation>,
}

/// Aggregated outcome of a whole run.
#[derive(Debug, Default)]
pub struct RunResult {
    pub violations: Vec<Violation>,
    pub files_scanned: usize,
    pub files_with_violations: usize,
    /// Files or directories that could not be read and were skipped.
    pub errors: Vec<EngineError>,
}

impl RunResult {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    pub(crate) fn record(&mut self, report: FileReport) {
        self.files_scanned += 1;
        if !report.violations.is_empty() {
            self.files_with_violations += 1;
        }
        self.violations.extend(report.violations);
    }
}

// Non-UTF-8 names are written with replacement characters, as in text output.
fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
