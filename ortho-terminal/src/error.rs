//! Error types for the terminal front end.

use thiserror::Error;

/// Errors that can stop the viewer.
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading commands or writing frames failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The start-up selection does not name a vertex of the model.
    #[error("selected vertex {index} is out of range for a model with {count} vertices")]
    InvalidSelection { index: usize, count: usize },

    /// The `--log` directive could not be parsed.
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// Result type for terminal operations.
pub type Result<T> = std::result::Result<T, AppError>;
