// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Wrong argument count, unparsable MAX_LEN, or `--help`/`--version`.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error(transparent)]
    Engine(#[from] line_length_engine::error::EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Exit status for this error. Everything that is not a help or version
    /// request fails with 1, the same status as a found violation.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(err) if !err.use_stderr() => 0,
            _ => 1,
        }
    }

    /// Print the error the way its kind expects to be printed.
    pub fn report(&self) {
        match self {
            Self::Usage(err) => {
                let _ = err.print();
            }
            other => eprintln!("error: {other}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
