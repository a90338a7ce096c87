// crates/cli/src/presentation.rs
use std::io::Write;

use line_length_engine::stats::{RunResult, Violation};

use crate::error::Result;
use crate::options::OutputFormat;

pub fn write_report<W: Write>(out: &mut W, violations: &[Violation], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, violations)?,
        OutputFormat::Json => write_json(out, violations)?,
        OutputFormat::Jsonl => write_jsonl(out, violations)?,
    }
    out.flush()?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, violations: &[Violation]) -> Result<()> {
    for v in violations {
        writeln!(out, "{}:{}: Length {}", v.path.display(), v.line, v.length)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, violations: &[Violation]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, violations)?;
    writeln!(out)?;
    Ok(())
}

fn write_jsonl<W: Write>(out: &mut W, violations: &[Violation]) -> Result<()> {
    for v in violations {
        serde_json::to_writer(&mut *out, v)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn summary_line(result: &RunResult) -> String {
    format!(
        "{} violation(s) in {} file(s) ({} scanned)",
        result.violations.len(),
        result.files_with_violations,
        result.files_scanned
    )
}
