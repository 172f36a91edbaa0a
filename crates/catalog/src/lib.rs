//! # Catalog Crate
//!
//! This crate holds the item domain the rest of the workspace filters over.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Color, Size, Product, Catalog)
//! - **record**: Dynamically attributed items for runtime-shaped data
//! - **parser**: Parse `::`-delimited catalog files
//! - **error**: Error types for catalog construction and loading
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Catalog, Color, Product, Size};
//!
//! let catalog = Catalog::from_products(vec![
//!     Product::new(1, "Apple", Color::Green, Size::Small),
//!     Product::new(2, "Tree", Color::Green, Size::Large),
//! ])?;
//!
//! assert_eq!(catalog.by_color(Color::Green).len(), 2);
//! # Ok::<(), catalog::CatalogError>(())
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod record;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{load_catalog, parse_catalog};
pub use record::{AttributeValue, Record};
pub use types::{Catalog, Color, Product, ProductId, Size};
