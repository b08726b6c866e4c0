//! Error types for pagesim.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in a simulation run.
///
/// Every variant aborts the current run. The engine never retries and never
/// substitutes a default; the caller decides how to report the failure.
#[derive(Debug, Error)]
pub enum Error {
    /// The named trace could not be opened because it does not exist.
    #[error("Unable to locate trace with name: {}", path.display())]
    InputSourceNotFound { path: PathBuf },

    /// I/O error while opening or reading the trace.
    #[error("I/O error while reading trace: {0}")]
    InputReadFailure(#[source] std::io::Error),

    /// A trace line holds a token that is not a page identifier.
    ///
    /// `line` is 1-based.
    #[error("Malformed page reference {token:?} on line {line}")]
    MalformedReference { line: usize, token: String },

    /// Frame capacity must be at least one frame.
    #[error("Invalid frame capacity: {0} (must be > 0)")]
    InvalidCapacity(i64),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::InputReadFailure(err)
    }
}
