use std::io;
use std::path::PathBuf;

/// Unified error type for the store wrapper, batch writer and benchmark driver.
///
/// Engine failures carry the engine's diagnostic string verbatim.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store could not be created or opened.
    #[error("failed to open store at {}: {message}", path.display())]
    Open { path: PathBuf, message: String },
    /// A single-key put or delete was rejected by the engine.
    #[error("write failed: {0}")]
    Write(String),
    /// A batch commit was rejected by the engine.
    #[error("batch commit failed: {0}")]
    Commit(String),
    /// A point read failed.
    #[error("read failed: {0}")]
    Read(String),
    /// The store handle has already been closed.
    #[error("store is closed")]
    Closed,
    /// A caller-supplied parameter is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Malformed replay log record (bad CRC, bad type byte, truncated).
    #[error("corruption: {0}")]
    Corruption(String),
    /// IO error from replay log files.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
