//! # Criteria Crate
//!
//! Composable specifications and filtering over catalog items.
//!
//! ## Main Components
//!
//! - **traits**: The `Specification` trait and chaining extension
//! - **specs**: Leaf specifications (color, size, name, named attribute)
//! - **combinators**: AND / OR / NOT composition
//! - **filter**: Lazy and eager application to item sequences
//! - **error**: Error types for construction and evaluation
//!
//! ## Architecture
//! A specification is a single capability: deciding whether one item
//! satisfies one condition. Combinators are themselves specifications, so
//! arbitrary trees can be built and handed to the same filter entry points
//! as any leaf. Adding a new condition means adding a new specification
//! type, never touching the filter.
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Color, Product, Size};
//! use criteria::{filter, ColorSpecification, SizeSpecification, SpecificationExt};
//!
//! let products = vec![
//!     Product::new(1, "Apple", Color::Green, Size::Small),
//!     Product::new(2, "Tree", Color::Green, Size::Large),
//!     Product::new(3, "House", Color::Blue, Size::Large),
//! ];
//!
//! let green_and_large = ColorSpecification::new(Color::Green)
//!     .and(SizeSpecification::new(Size::Large));
//!
//! let matching: Vec<&Product> = filter(&products, &green_and_large)
//!     .collect::<Result<_, _>>()?;
//!
//! assert_eq!(matching.len(), 1);
//! assert_eq!(matching[0].name, "Tree");
//! # Ok::<(), criteria::CriteriaError>(())
//! ```

pub mod combinators;
pub mod error;
pub mod filter;
pub mod specs;
pub mod traits;

// Re-export main types
pub use combinators::{AndSpecification, NotSpecification, OrSpecification};
pub use error::{CriteriaError, Result};
pub use filter::{filter, filter_all, Matches};
pub use specs::{AttributeEquals, ColorSpecification, NameContains, SizeSpecification};
pub use traits::{Specification, SpecificationExt};
