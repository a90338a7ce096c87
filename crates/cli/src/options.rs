use clap::ValueEnum;

/// How violations are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<path>:<line>: Length <n>`
    #[default]
    Text,
    /// One JSON array of all violations
    Json,
    /// One JSON object per line
    Jsonl,
}

/// Format of the log records written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}
