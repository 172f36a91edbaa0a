//! Specification matching a product's color.

use crate::error::Result;
use crate::traits::Specification;
use catalog::{Color, Product};

/// Satisfied by products of exactly the given color.
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn name(&self) -> &str {
        "ColorSpecification"
    }

    fn is_satisfied(&self, item: &Product) -> Result<bool> {
        Ok(item.color == self.color)
    }
}
