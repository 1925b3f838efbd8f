//! Publishing a table into an [`Environment`].

use crate::{environment::Environment, table::SharedTable};

/// Which path a publish took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// A callback was present and received the table.
    Registered,
    /// No callback was present; the table now sits in the pending slot.
    Pending,
}

/// Hand `table` to `env`.
///
/// If the environment has a callback it is invoked exactly once, before this
/// function returns. Otherwise the table is written to the pending slot.
/// Exactly one of the two happens.
pub fn publish<E: Environment + ?Sized>(table: SharedTable, env: &mut E) -> Delivery {
    match env.try_get_callback() {
        Some(callback) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                libraries = table.len(),
                descriptors = table.descriptor_count(),
                "registering implementors"
            );
            callback.register_implementors(table);
            Delivery::Registered
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(libraries = table.len(), "no callback, leaving implementors pending");
            env.set_pending(table);
            Delivery::Pending
        }
    }
}

/// A table awaiting its single hand-off.
///
/// Publishing consumes the registry, so a given registry delivers its table
/// once.
#[derive(Debug, Clone)]
pub struct ImplementorRegistry {
    table: SharedTable,
}

impl ImplementorRegistry {
    /// Wrap a frozen table.
    pub fn new(table: impl Into<SharedTable>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// The table that will be published.
    pub fn table(&self) -> &SharedTable {
        &self.table
    }

    /// Deliver the table. See [`publish`].
    pub fn publish<E: Environment + ?Sized>(self, env: &mut E) -> Delivery {
        publish(self.table, env)
    }
}
