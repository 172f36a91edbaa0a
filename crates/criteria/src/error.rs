//! Error types for specification construction and evaluation.

use thiserror::Error;

/// Errors a specification can report.
///
/// A normal "not satisfied" outcome is never an error; these variants cover
/// caller mistakes that must surface at the offending call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    /// A combinator was constructed with no child specifications
    #[error("{combinator} requires at least one child specification")]
    EmptyComposite { combinator: &'static str },

    /// An item was evaluated against an attribute it does not carry
    #[error("item has no attribute named {attribute:?}")]
    AttributeMissing { attribute: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CriteriaError>;
