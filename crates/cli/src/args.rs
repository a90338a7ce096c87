use clap::{ArgAction, Parser};

use crate::options::{LogFormat, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "check_line_length",
    version = crate::VERSION,
    about = "Report lines longer than MAX_LEN bytes in files matching PATTERN"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Glob pattern; `**` matches any number of directories
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Longest accepted line in bytes
    #[arg(value_name = "MAX_LEN")]
    pub max_len: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print a violation count to stderr after the report
    #[arg(long)]
    pub summary: bool,

    /// Let wildcards match hidden files and directories
    #[arg(long)]
    pub hidden: bool,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_links: bool,

    /// Match the pattern case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Abort on the first unreadable file instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log record format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
