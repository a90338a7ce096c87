// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

use std::io::BufWriter;

use line_length_engine::config::CheckConfig;

use crate::args::Args;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one check and report whether any violation was found.
pub fn run(args: &Args) -> Result<bool> {
    let config = CheckConfig::try_from(args)?;
    let result = line_length_engine::run(&config)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    presentation::write_report(&mut out, &result.violations, args.format)?;

    if args.summary {
        eprintln!("{}", presentation::summary_line(&result));
    }

    Ok(result.has_violations())
}
