//! Dynamically attributed items.
//!
//! `Product` has a fixed shape known at compile time, so a predicate over it
//! can never find an attribute missing. Some callers only discover their item
//! shapes at runtime (records loaded from user data, ad-hoc tool input); for
//! those, `Record` exposes attributes by name and lookups can fail.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{Color, Size};

/// A value a named attribute can hold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Text(String),
    Color(Color),
    Size(Size),
    Number(f64),
}

/// An item whose attributes are looked up by name at evaluation time.
///
/// ## Usage
/// ```
/// use catalog::{AttributeValue, Color, Record};
///
/// let apple = Record::new("Apple")
///     .with_attribute("color", AttributeValue::Color(Color::Green))
///     .with_attribute("weight", AttributeValue::Number(0.2));
///
/// assert!(apple.attribute("color").is_some());
/// assert!(apple.attribute("size").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    attributes: HashMap<String, AttributeValue>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
        }
    }

    /// Add an attribute (builder pattern)
    pub fn with_attribute(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Set or replace an attribute in place
    pub fn set_attribute(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.attributes.insert(name.into(), value);
    }

    /// Look up an attribute by name.
    ///
    /// `None` means the record simply does not carry that attribute; it is
    /// the caller's contract whether that is an error.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup() {
        let record = Record::new("Tree")
            .with_attribute("color", AttributeValue::Color(Color::Green))
            .with_attribute("size", AttributeValue::Size(Size::Large));

        assert_eq!(
            record.attribute("color"),
            Some(&AttributeValue::Color(Color::Green))
        );
        assert_eq!(record.attribute("height"), None);
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut record = Record::new("Apple");
        record.set_attribute("color", AttributeValue::Color(Color::Red));
        record.set_attribute("color", AttributeValue::Color(Color::Green));

        assert_eq!(
            record.attribute("color"),
            Some(&AttributeValue::Color(Color::Green))
        );
    }
}
