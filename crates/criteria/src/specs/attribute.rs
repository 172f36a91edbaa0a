//! Specification over dynamically attributed records.
//!
//! `Record` items look their attributes up by name, so unlike the typed
//! product specifications, evaluation here can fail: a record simply may
//! not carry the attribute being compared.

use crate::error::{CriteriaError, Result};
use crate::traits::Specification;
use catalog::{AttributeValue, Record};

/// Satisfied by records whose named attribute equals the expected value.
///
/// # Errors
/// `is_satisfied` returns `CriteriaError::AttributeMissing` when the record
/// does not carry the attribute at all. A present-but-different value is a
/// normal `Ok(false)`.
pub struct AttributeEquals {
    attribute: String,
    expected: AttributeValue,
}

impl AttributeEquals {
    pub fn new(attribute: impl Into<String>, expected: AttributeValue) -> Self {
        Self {
            attribute: attribute.into(),
            expected,
        }
    }
}

impl Specification<Record> for AttributeEquals {
    fn name(&self) -> &str {
        "AttributeEquals"
    }

    fn is_satisfied(&self, item: &Record) -> Result<bool> {
        let value = item
            .attribute(&self.attribute)
            .ok_or_else(|| CriteriaError::AttributeMissing {
                attribute: self.attribute.clone(),
            })?;
        Ok(*value == self.expected)
    }
}
