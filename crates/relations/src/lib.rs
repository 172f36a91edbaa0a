//! # Relations Crate
//!
//! Family-relationship queries behind a browser abstraction.
//!
//! `Research` is the high-level consumer; it depends only on the
//! `RelationshipBrowser` trait, never on how `Relationships` stores its
//! triples. Swapping the store for another backend changes nothing on the
//! research side.

use std::fmt;

/// How one person relates to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Parent,
    Child,
    Sibling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The capability high-level modules depend on.
pub trait RelationshipBrowser {
    /// Names of everyone recorded as a child of `name`
    fn children_of(&self, name: &str) -> Vec<String>;
}

/// In-memory store of directed relationship triples.
#[derive(Debug, Default)]
pub struct Relationships {
    relations: Vec<(String, Relation, String)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a parent/child pair, in both directions.
    pub fn add_parent_child(&mut self, parent: &Person, child: &Person) {
        self.relations
            .push((parent.name.clone(), Relation::Parent, child.name.clone()));
        self.relations
            .push((child.name.clone(), Relation::Child, parent.name.clone()));
    }

    /// Record a sibling pair, in both directions.
    pub fn add_siblings(&mut self, a: &Person, b: &Person) {
        self.relations
            .push((a.name.clone(), Relation::Sibling, b.name.clone()));
        self.relations
            .push((b.name.clone(), Relation::Sibling, a.name.clone()));
    }

    /// Number of stored triples
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

impl RelationshipBrowser for Relationships {
    fn children_of(&self, name: &str) -> Vec<String> {
        let children: Vec<String> = self
            .relations
            .iter()
            .filter(|(from, relation, _)| from == name && *relation == Relation::Parent)
            .map(|(_, _, to)| to.clone())
            .collect();
        tracing::debug!(
            "Scanned {} triples for children of {}: found {}",
            self.relations.len(),
            name,
            children.len()
        );
        children
    }
}

/// High-level consumer of relationship data.
///
/// Holds only the browser trait object, so it is indifferent to the
/// storage strategy behind it.
pub struct Research<'a> {
    browser: &'a dyn RelationshipBrowser,
}

impl<'a> Research<'a> {
    pub fn new(browser: &'a dyn RelationshipBrowser) -> Self {
        Self { browser }
    }

    /// One formatted finding per recorded child of `name`.
    pub fn report(&self, name: &str) -> Vec<String> {
        self.browser
            .children_of(name)
            .into_iter()
            .map(|child| format!("{} has a child called {}", name, child))
            .collect()
    }
}
