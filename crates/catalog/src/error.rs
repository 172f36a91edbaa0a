//! Error types for the catalog crate.

use thiserror::Error;

use crate::types::ProductId;

/// Errors that can occur while building or loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line in a catalog file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// A field had a value outside its allowed set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two products were inserted with the same id
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
