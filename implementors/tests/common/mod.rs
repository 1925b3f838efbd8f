#![allow(dead_code)]

use implementors::{ImplementorDescriptor, ImplementorTable, SharedTable, TableBuilder};
use std::path::PathBuf;

// ============================================================================
// Fixtures
// ============================================================================

/// A generated `trait.UnwindSafe.js` covering ten libraries.
pub const UNWIND_SAFE_SCRIPT: &str = include_str!("../fixtures/trait.UnwindSafe.js");

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/trait.UnwindSafe.js")
}

// ============================================================================
// Sample Tables
// ============================================================================

/// `{"libA": [{text: "impl Foo", synthetic: true, types: []}]}`
pub fn lib_a() -> SharedTable {
    TableBuilder::new()
        .library(
            "libA",
            vec![ImplementorDescriptor::new("impl Foo").synthetic(true)],
        )
        .unwrap()
        .build()
        .into_shared()
}

pub fn texts(table: &ImplementorTable, library: &str) -> Vec<String> {
    table
        .get(library)
        .map(|list| list.iter().map(|d| d.text.clone()).collect())
        .unwrap_or_default()
}
