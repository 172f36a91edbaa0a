//! Combinators that build larger specifications out of smaller ones.
//!
//! Each combinator owns its children as boxed trait objects, so any mix of
//! leaf and composite specifications can be combined. Children are evaluated
//! in construction order and evaluation short-circuits, though a caller can
//! only observe the difference through evaluation counts, never through the
//! result.

use crate::error::{CriteriaError, Result};
use crate::traits::Specification;

/// Satisfied iff every child is satisfied.
///
/// Construction requires at least one child; an empty conjunction has no
/// defined meaning here and is rejected rather than treated as vacuously
/// true.
pub struct AndSpecification<T> {
    children: Vec<Box<dyn Specification<T>>>,
}

impl<T> AndSpecification<T> {
    /// Create a conjunction over an ordered, non-empty list of children.
    ///
    /// # Returns
    /// * `Err(CriteriaError::EmptyComposite)` if `children` is empty
    pub fn new(children: Vec<Box<dyn Specification<T>>>) -> Result<Self> {
        if children.is_empty() {
            return Err(CriteriaError::EmptyComposite {
                combinator: "AndSpecification",
            });
        }
        Ok(Self { children })
    }

    pub(crate) fn pair(
        a: impl Specification<T> + 'static,
        b: impl Specification<T> + 'static,
    ) -> Self {
        Self {
            children: vec![Box::new(a), Box::new(b)],
        }
    }

    /// Number of child specifications
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        false // construction rejects empty child lists
    }
}

impl<T> std::fmt::Debug for AndSpecification<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndSpecification")
            .field("children", &self.children.len())
            .finish()
    }
}

impl<T> Specification<T> for AndSpecification<T> {
    fn name(&self) -> &str {
        "AndSpecification"
    }

    fn is_satisfied(&self, item: &T) -> Result<bool> {
        for child in &self.children {
            if !child.is_satisfied(item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Satisfied iff at least one child is satisfied.
///
/// Same construction contract as [`AndSpecification`].
pub struct OrSpecification<T> {
    children: Vec<Box<dyn Specification<T>>>,
}

impl<T> OrSpecification<T> {
    pub fn new(children: Vec<Box<dyn Specification<T>>>) -> Result<Self> {
        if children.is_empty() {
            return Err(CriteriaError::EmptyComposite {
                combinator: "OrSpecification",
            });
        }
        Ok(Self { children })
    }

    pub(crate) fn pair(
        a: impl Specification<T> + 'static,
        b: impl Specification<T> + 'static,
    ) -> Self {
        Self {
            children: vec![Box::new(a), Box::new(b)],
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl<T> Specification<T> for OrSpecification<T> {
    fn name(&self) -> &str {
        "OrSpecification"
    }

    fn is_satisfied(&self, item: &T) -> Result<bool> {
        for child in &self.children {
            if child.is_satisfied(item)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Satisfied iff the inner specification is not.
pub struct NotSpecification<T> {
    inner: Box<dyn Specification<T>>,
}

impl<T> NotSpecification<T> {
    pub fn new(inner: impl Specification<T> + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl<T> Specification<T> for NotSpecification<T> {
    fn name(&self) -> &str {
        "NotSpecification"
    }

    fn is_satisfied(&self, item: &T) -> Result<bool> {
        Ok(!self.inner.is_satisfied(item)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{ColorSpecification, SizeSpecification};
    use crate::traits::SpecificationExt;
    use catalog::{Color, Product, Size};

    fn tree() -> Product {
        Product::new(2, "Tree", Color::Green, Size::Large)
    }

    #[test]
    fn test_and_requires_children() {
        let err = AndSpecification::<Product>::new(Vec::new()).unwrap_err();
        assert_eq!(
            err,
            CriteriaError::EmptyComposite {
                combinator: "AndSpecification"
            }
        );
    }

    #[test]
    fn test_or_requires_children() {
        assert!(OrSpecification::<Product>::new(Vec::new()).is_err());
    }

    #[test]
    fn test_and_all_children_must_match() {
        let green_and_large = ColorSpecification::new(Color::Green)
            .and(SizeSpecification::new(Size::Large));

        assert!(green_and_large.is_satisfied(&tree()).unwrap());

        let green_and_small = ColorSpecification::new(Color::Green)
            .and(SizeSpecification::new(Size::Small));
        assert!(!green_and_small.is_satisfied(&tree()).unwrap());
    }

    #[test]
    fn test_or_any_child_may_match() {
        let red_or_large =
            ColorSpecification::new(Color::Red).or(SizeSpecification::new(Size::Large));

        assert!(red_or_large.is_satisfied(&tree()).unwrap());

        let red_or_small =
            ColorSpecification::new(Color::Red).or(SizeSpecification::new(Size::Small));
        assert!(!red_or_small.is_satisfied(&tree()).unwrap());
    }

    #[test]
    fn test_not_inverts() {
        let not_green = ColorSpecification::new(Color::Green).not();
        assert!(!not_green.is_satisfied(&tree()).unwrap());

        let not_red = ColorSpecification::new(Color::Red).not();
        assert!(not_red.is_satisfied(&tree()).unwrap());
    }

    #[test]
    fn test_new_preserves_child_order() {
        let spec = AndSpecification::new(vec![
            Box::new(ColorSpecification::new(Color::Green)) as Box<dyn Specification<Product>>,
            Box::new(SizeSpecification::new(Size::Large)),
        ])
        .unwrap();

        assert_eq!(spec.len(), 2);
        assert!(spec.is_satisfied(&tree()).unwrap());
    }
}
