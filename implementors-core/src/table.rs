//! # Implementor Table
//!
//! A mapping from library name to the implementors documented in it.
//!
//! Tables are assembled with [`TableBuilder`] and frozen on `build()`. They
//! are handed around as [`SharedTable`] so that every consumer sees the same
//! allocation the producer published.

use crate::{descriptor::ImplementorList, error::TableError};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};

/// A frozen table, shared by reference count.
pub type SharedTable = Arc<ImplementorTable>;

/// Immutable mapping from library name to its [`ImplementorList`].
///
/// Iteration is in ascending library-name order.
///
/// # Example
///
/// ```rust
/// use implementors_core::{ImplementorDescriptor, ImplementorList, TableBuilder};
///
/// let table = TableBuilder::new()
///     .library("libA", ImplementorList::from(vec![ImplementorDescriptor::new("impl Foo")]))
///     .unwrap()
///     .build();
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.get("libA").unwrap()[0].text, "impl Foo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementorTable {
    libraries: BTreeMap<String, ImplementorList>,
}

impl ImplementorTable {
    /// An empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up the implementors documented for `library`.
    pub fn get(&self, library: &str) -> Option<&ImplementorList> {
        self.libraries.get(library)
    }

    /// Whether `library` has an entry.
    pub fn contains(&self, library: &str) -> bool {
        self.libraries.contains_key(library)
    }

    /// Library names in ascending order.
    pub fn libraries(&self) -> impl Iterator<Item = &str> {
        self.libraries.keys().map(String::as_str)
    }

    /// `(library, implementors)` pairs in ascending library order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImplementorList)> {
        self.libraries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of libraries.
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Whether the table has no libraries.
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// Total number of descriptors across all libraries.
    pub fn descriptor_count(&self) -> usize {
        self.libraries.values().map(|list| list.len()).sum()
    }

    /// Freeze into a [`SharedTable`] for hand-off.
    pub fn into_shared(self) -> SharedTable {
        Arc::new(self)
    }
}

/// Builder for an [`ImplementorTable`].
///
/// Library names must be non-empty and unique.
#[derive(Debug, Default)]
pub struct TableBuilder {
    libraries: BTreeMap<String, ImplementorList>,
}

impl TableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the implementors for one library.
    pub fn library(
        mut self,
        name: impl Into<String>,
        implementors: impl Into<ImplementorList>,
    ) -> Result<Self, TableError> {
        self.insert(name, implementors)?;
        Ok(self)
    }

    /// Add the implementors for one library in place.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        implementors: impl Into<ImplementorList>,
    ) -> Result<(), TableError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TableError::EmptyLibraryName);
        }
        if self.libraries.contains_key(&name) {
            return Err(TableError::DuplicateLibrary(name));
        }
        self.libraries.insert(name, implementors.into());
        Ok(())
    }

    /// Freeze the table.
    pub fn build(self) -> ImplementorTable {
        ImplementorTable {
            libraries: self.libraries,
        }
    }

    /// Add several libraries, stopping at the first invalid one.
    pub fn extend_entries<I, N, L>(mut self, entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: Into<ImplementorList>,
    {
        for (name, implementors) in entries {
            self.insert(name, implementors)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ImplementorDescriptor;

    fn list(texts: &[&str]) -> ImplementorList {
        texts.iter().map(|t| ImplementorDescriptor::new(*t)).collect()
    }

    #[test]
    fn test_build_and_lookup() {
        let table = TableBuilder::new()
            .library("zeta", list(&["impl Z"]))
            .unwrap()
            .library("alpha", list(&["impl A1", "impl A2"]))
            .unwrap()
            .build();

        assert_eq!(table.len(), 2);
        assert_eq!(table.descriptor_count(), 3);
        assert!(table.contains("alpha"));
        assert!(!table.contains("beta"));
        assert_eq!(table.libraries().collect::<Vec<_>>(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_duplicate_library_rejected() {
        let err = TableBuilder::new()
            .library("libA", list(&["impl Foo"]))
            .unwrap()
            .library("libA", list(&["impl Bar"]))
            .unwrap_err();

        assert_eq!(err, TableError::DuplicateLibrary("libA".into()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = TableBuilder::new().library("", list(&[])).unwrap_err();
        assert_eq!(err, TableError::EmptyLibraryName);
    }

    #[test]
    fn test_extend_entries() {
        let table = TableBuilder::new()
            .extend_entries([
                ("a", vec![ImplementorDescriptor::new("x")]),
                ("b", vec![]),
            ])
            .unwrap()
            .build();

        assert_eq!(table.len(), 2);
        assert!(table.get("b").unwrap().is_empty());
    }

    #[test]
    fn test_empty_list_is_kept() {
        let table = TableBuilder::new().library("none", list(&[])).unwrap().build();
        assert!(table.get("none").is_some());
        assert_eq!(table.descriptor_count(), 0);
    }

    #[test]
    fn test_json_object_form() {
        let table = TableBuilder::new()
            .library("libA", list(&["impl Foo"]))
            .unwrap()
            .build();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"libA":[{"text":"impl Foo","synthetic":false,"types":[]}]}"#
        );
    }
}
