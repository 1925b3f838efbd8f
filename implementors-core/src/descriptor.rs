//! Implementor descriptors and the ordered lists that hold them.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One documented implementation of a trait.
///
/// `text` is the pre-rendered display fragment exactly as the documentation
/// generator produced it. It is carried through untouched: nothing in this
/// crate looks inside it.
///
/// # Example
///
/// ```rust
/// use implementors_core::ImplementorDescriptor;
///
/// let desc = ImplementorDescriptor::new("impl UnwindSafe for Config").synthetic(true);
/// assert!(desc.synthetic);
/// assert!(desc.types.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImplementorDescriptor {
    /// Opaque formatted display text.
    pub text: String,
    /// Whether the implementation was synthesized (auto trait) rather than written.
    pub synthetic: bool,
    /// Opaque identifiers of the types involved. May be empty.
    pub types: Vec<String>,
}

impl ImplementorDescriptor {
    /// Create a non-synthetic descriptor with no type identifiers.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            synthetic: false,
            types: Vec::new(),
        }
    }

    /// Set the synthetic flag.
    pub fn synthetic(mut self, synthetic: bool) -> Self {
        self.synthetic = synthetic;
        self
    }

    /// Replace the type identifiers.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }
}

/// An ordered, immutable sequence of descriptors for one library.
///
/// Order reflects documentation order and is never changed after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementorList(Vec<ImplementorDescriptor>);

impl ImplementorList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Consume the list, returning the descriptors in order.
    pub fn into_inner(self) -> Vec<ImplementorDescriptor> {
        self.0
    }
}

impl From<Vec<ImplementorDescriptor>> for ImplementorList {
    fn from(descriptors: Vec<ImplementorDescriptor>) -> Self {
        Self(descriptors)
    }
}

impl FromIterator<ImplementorDescriptor> for ImplementorList {
    fn from_iter<T: IntoIterator<Item = ImplementorDescriptor>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for ImplementorList {
    type Target = [ImplementorDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ImplementorList {
    type Item = &'a ImplementorDescriptor;
    type IntoIter = std::slice::Iter<'a, ImplementorDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ImplementorList {
    type Item = ImplementorDescriptor;
    type IntoIter = std::vec::IntoIter<ImplementorDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
