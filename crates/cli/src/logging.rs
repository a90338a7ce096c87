use tracing::Level;
use tracing_subscriber::fmt;

use crate::options::LogFormat;

/// Map `-q` / `-v` counts to a maximum log level. Warnings are shown by default.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Log records always go to stderr so the
/// violation report on stdout stays machine-readable.
pub fn init_tracing(level: Level, format: LogFormat) {
    let builder = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed; keep the first one.
    let _ = match format {
        LogFormat::Compact => {
            tracing::subscriber::set_global_default(builder.compact().without_time().finish())
        }
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };
}
