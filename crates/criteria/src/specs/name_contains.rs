//! Specification matching a substring of a product's name.

use crate::error::Result;
use crate::traits::Specification;
use catalog::Product;

/// Satisfied by products whose name contains the needle,
/// case-insensitively.
pub struct NameContains {
    /// Needle stored lowercased so each evaluation only lowercases the item
    needle: String,
}

impl NameContains {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into().to_lowercase(),
        }
    }
}

impl Specification<Product> for NameContains {
    fn name(&self) -> &str {
        "NameContains"
    }

    fn is_satisfied(&self, item: &Product) -> Result<bool> {
        Ok(item.name.to_lowercase().contains(&self.needle))
    }
}
