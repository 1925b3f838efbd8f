//! Link-time collection of library entries via `inventory`.
//!
//! Each library submits its own entry from wherever it is defined; the host
//! gathers them into one table at startup and publishes it.
//!
//! ```rust,ignore
//! use implementors_std::collect::SubmittedLibrary;
//!
//! fn arrayvec() -> ImplementorList { ... }
//!
//! inventory::submit! { SubmittedLibrary::new("arrayvec", arrayvec) }
//!
//! fn main() {
//!     implementors_std::collect::publish_collected(&mut GlobalEnvironment).unwrap();
//! }
//! ```

use implementors_core::{
    Delivery, Environment, ImplementorList, ImplementorTable, RegistryError, TableBuilder,
    TableError, publish,
};

/// One library's entry, submitted with `inventory::submit!`.
pub struct SubmittedLibrary {
    /// Library name.
    pub name: &'static str,
    /// Produces the library's descriptors when the table is collected.
    pub entries: fn() -> ImplementorList,
}

impl SubmittedLibrary {
    /// Create a submission. `const` so it can appear in `inventory::submit!`.
    pub const fn new(name: &'static str, entries: fn() -> ImplementorList) -> Self {
        Self { name, entries }
    }
}

inventory::collect!(SubmittedLibrary);

/// Gather every submitted library into one table.
///
/// Fails if two submissions share a name.
pub fn collect_table() -> Result<ImplementorTable, TableError> {
    let mut builder = TableBuilder::new();
    for submitted in inventory::iter::<SubmittedLibrary> {
        builder.insert(submitted.name, (submitted.entries)())?;
    }
    let table = builder.build();

    #[cfg(feature = "tracing")]
    tracing::debug!(libraries = table.len(), "collected submitted implementors");
    Ok(table)
}

/// Collect every submitted library and publish the result into `env`.
pub fn publish_collected<E: Environment + ?Sized>(env: &mut E) -> Result<Delivery, RegistryError> {
    let table = collect_table()?;
    Ok(publish(table.into_shared(), env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::LocalEnvironment;
    use implementors_core::ImplementorDescriptor;

    fn collected_alpha() -> ImplementorList {
        vec![
            ImplementorDescriptor::new("impl UnwindSafe for Alpha").synthetic(true),
            ImplementorDescriptor::new("impl UnwindSafe for Beta").synthetic(true),
        ]
        .into()
    }

    fn collected_gamma() -> ImplementorList {
        ImplementorList::new()
    }

    inventory::submit! { SubmittedLibrary::new("collected_alpha", collected_alpha) }
    inventory::submit! { SubmittedLibrary::new("collected_gamma", collected_gamma) }

    #[test]
    fn test_collect_table() {
        let table = collect_table().unwrap();

        let alpha = table.get("collected_alpha").unwrap();
        assert_eq!(alpha.len(), 2);
        assert_eq!(alpha[0].text, "impl UnwindSafe for Alpha");
        assert!(table.get("collected_gamma").unwrap().is_empty());
    }

    #[test]
    fn test_publish_collected_parks_table() {
        let mut env = LocalEnvironment::new();
        let delivery = publish_collected(&mut env).unwrap();

        assert_eq!(delivery, Delivery::Pending);
        assert!(env.pending().unwrap().contains("collected_alpha"));
    }
}
