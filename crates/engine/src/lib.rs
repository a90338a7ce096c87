// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod pattern;
pub mod processor;
pub mod stats;

use crate::config::CheckConfig;
use crate::error::Result;
use crate::pattern::GlobPattern;
use crate::stats::RunResult;

/// Expand the configured pattern and scan every matching file in turn.
///
/// Files are processed one at a time in enumeration order; each is read in
/// full before its violations are recorded.
///
/// # Errors
///
/// Returns an error if the pattern does not compile. Unreadable files and
/// directories are collected in `RunResult::errors` and skipped, unless
/// `config.strict` is set, in which case the first one aborts the run.
pub fn run(config: &CheckConfig) -> Result<RunResult> {
    let pattern = GlobPattern::new(&config.pattern, config.walk.case_insensitive)?;
    let mut result = RunResult::default();

    for item in filesystem::matching_files(&pattern, &config.walk) {
        match item.and_then(|path| processor::scan_file(&path, config.max_len)) {
            Ok(report) => result.record(report),
            Err(err) if config.strict => return Err(err),
            Err(err) => {
                tracing::warn!("skipping: {err}");
                result.errors.push(err);
            }
        }
    }

    tracing::info!(
        pattern = pattern.pattern(),
        files = result.files_scanned,
        violations = result.violations.len(),
        skipped = result.errors.len(),
        "check finished"
    );

    Ok(result)
}
