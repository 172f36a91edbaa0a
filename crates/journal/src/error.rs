//! Error types for the journal crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    /// I/O error while reading or writing a journal file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Journal file contents couldn't be decoded
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// An entry position outside the journal was addressed
    #[error("Entry position {pos} out of range (journal has {len} entries)")]
    OutOfRange { pos: usize, len: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, JournalError>;
