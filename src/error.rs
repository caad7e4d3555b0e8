use thiserror::Error;

/// Errors that may rise when chunking intervals or parsing units
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Chunks must hold at least one epoch
    #[error("chunk size must be greater than zero, got {0}")]
    InvalidChunkSize(i64),
    /// Unknown calendar unit description
    #[error("unknown calendar unit \"{0}\"")]
    UnknownCalendarUnit(String),
}
