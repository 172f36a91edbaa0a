//! Core domain types for the product catalog.
//!
//! This module defines the item shape the rest of the workspace filters over:
//! - Type alias for product ids (ProductId)
//! - Closed attribute enums (Color, Size) with FromStr/Display
//! - The Product struct itself
//! - Catalog, an insertion-ordered store with secondary indices

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Unique identifier for a product
pub type ProductId = u32;

/// Product color attribute.
///
/// A closed set: predicates compare against these variants directly,
/// and CLI flags / catalog files parse into them via `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl FromStr for Color {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(CatalogError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        write!(f, "{}", s)
    }
}

/// Product size attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(CatalogError::InvalidValue {
                field: "size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        write!(f, "{}", s)
    }
}

/// A single catalog item.
///
/// Attributes are plain public fields; predicate evaluation only ever
/// reads them, never mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            size,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

/// Owning store of products.
///
/// Keeps products in insertion order (filtering preserves relative order,
/// so the store must have a stable one) and maintains secondary indices
/// for direct attribute lookups.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Products in insertion order
    products: Vec<Product>,
    /// Position of each product in `products`, keyed by id
    by_id: HashMap<ProductId, usize>,
    /// Product ids grouped by color
    color_index: HashMap<Color, Vec<ProductId>>,
    /// Product ids grouped by size
    size_index: HashMap<Size, Vec<ProductId>>,
}

impl Catalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of products, preserving their order.
    ///
    /// # Returns
    /// * `Err(CatalogError::DuplicateId)` if two products share an id
    pub fn from_products(products: Vec<Product>) -> crate::error::Result<Self> {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product)?;
        }
        Ok(catalog)
    }

    /// Insert a product and update the indices.
    ///
    /// Rejects ids already present rather than silently replacing the
    /// earlier product.
    pub fn insert(&mut self, product: Product) -> crate::error::Result<()> {
        if self.by_id.contains_key(&product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }

        self.by_id.insert(product.id, self.products.len());
        self.color_index
            .entry(product.color)
            .or_default()
            .push(product.id);
        self.size_index
            .entry(product.size)
            .or_default()
            .push(product.id);
        self.products.push(product);
        Ok(())
    }

    /// Get a product by id
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).map(|&pos| &self.products[pos])
    }

    /// All products, in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Ids of all products with the given color
    ///
    /// Returns an empty slice when no product has that color
    pub fn by_color(&self, color: Color) -> &[ProductId] {
        self.color_index
            .get(&color)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Ids of all products with the given size
    pub fn by_size(&self, size: Size) -> &[ProductId] {
        self.size_index
            .get(&size)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut catalog = Catalog::new();
        catalog
            .insert(Product::new(1, "Apple", Color::Green, Size::Small))
            .unwrap();

        let apple = catalog.get(1).unwrap();
        assert_eq!(apple.name, "Apple");
        assert_eq!(apple.color, Color::Green);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = Catalog::new();
        catalog
            .insert(Product::new(1, "Apple", Color::Green, Size::Small))
            .unwrap();

        let err = catalog
            .insert(Product::new(1, "Tree", Color::Green, Size::Large))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = Catalog::from_products(vec![
            Product::new(3, "House", Color::Blue, Size::Large),
            Product::new(1, "Apple", Color::Green, Size::Small),
            Product::new(2, "Tree", Color::Green, Size::Large),
        ])
        .unwrap();

        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["House", "Apple", "Tree"]);
    }

    #[test]
    fn test_attribute_indices() {
        let catalog = Catalog::from_products(vec![
            Product::new(1, "Apple", Color::Green, Size::Small),
            Product::new(2, "Tree", Color::Green, Size::Large),
            Product::new(3, "House", Color::Blue, Size::Large),
        ])
        .unwrap();

        assert_eq!(catalog.by_color(Color::Green), [1, 2]);
        assert_eq!(catalog.by_size(Size::Large), [2, 3]);
        assert!(catalog.by_color(Color::Red).is_empty());
    }

    #[test]
    fn test_color_and_size_parsing() {
        assert_eq!("green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("LARGE".parse::<Size>().unwrap(), Size::Large);

        let err = "purple".parse::<Color>().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { .. }));
    }
}
