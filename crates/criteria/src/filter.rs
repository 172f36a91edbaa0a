//! Applying a specification to a sequence of items.
//!
//! Two entry points:
//! - [`filter`]: lazy, borrowing. Yields matching items one by one in input
//!   order; nothing is copied and nothing is evaluated before `next()`.
//! - [`filter_all`]: eager, owning. Moves a `Vec` through the specification
//!   and returns the survivors, stopping at the first evaluation error.

use crate::error::Result;
use crate::traits::Specification;

/// Lazy iterator over the items a specification satisfies.
///
/// Yields `Result` so that an evaluation error surfaces at the offending
/// `next()` call instead of being swallowed. The sequence is finite and
/// restartable only by calling [`filter`] again.
pub struct Matches<'s, I, S: ?Sized> {
    items: I,
    spec: &'s S,
}

impl<'s, 'a, T, I, S> Iterator for Matches<'s, I, S>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    type Item = Result<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.items.next()?;
            match self.spec.is_satisfied(item) {
                Ok(true) => return Some(Ok(item)),
                Ok(false) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Produce the lazy subsequence of `items` satisfying `spec`.
///
/// Items are yielded by reference in their original relative order. An empty
/// input yields an empty sequence; no error is raised for exhaustion.
///
/// ## Usage
/// ```
/// use catalog::{Color, Product, Size};
/// use criteria::{filter, ColorSpecification};
///
/// let products = vec![
///     Product::new(1, "Apple", Color::Green, Size::Small),
///     Product::new(3, "House", Color::Blue, Size::Large),
/// ];
///
/// let green = ColorSpecification::new(Color::Green);
/// let matching: Vec<&Product> = filter(&products, &green)
///     .collect::<Result<_, _>>()?;
///
/// assert_eq!(matching.len(), 1);
/// assert_eq!(matching[0].name, "Apple");
/// # Ok::<(), criteria::CriteriaError>(())
/// ```
pub fn filter<'s, 'a, T, I, S>(items: I, spec: &'s S) -> Matches<'s, I::IntoIter, S>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    Matches {
        items: items.into_iter(),
        spec,
    }
}

/// Apply `spec` to every item, returning the survivors.
///
/// Takes ownership of the items and moves the matching ones into the result,
/// so nothing is cloned. Stops at the first evaluation error.
pub fn filter_all<T, S>(items: Vec<T>, spec: &S) -> Result<Vec<T>>
where
    S: Specification<T> + ?Sized,
{
    let input_count = items.len();
    let mut kept = Vec::new();
    for item in items {
        if spec.is_satisfied(&item)? {
            kept.push(item);
        }
    }
    tracing::debug!(
        "Applied {}: kept {} of {} items",
        spec.name(),
        kept.len(),
        input_count
    );
    Ok(kept)
}
