//! Specification matching a product's size.

use crate::error::Result;
use crate::traits::Specification;
use catalog::{Product, Size};

/// Satisfied by products of exactly the given size.
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn name(&self) -> &str {
        "SizeSpecification"
    }

    fn is_satisfied(&self, item: &Product) -> Result<bool> {
        Ok(item.size == self.size)
    }
}
