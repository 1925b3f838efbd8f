//! # Hosting Environment
//!
//! The hosting side of a table hand-off. An environment answers two
//! questions: is somebody already listening for tables, and where should a
//! table go when nobody is.
//!
//! Both are injected explicitly. There is no ambient lookup; a host that
//! wants process-wide behavior supplies an environment backed by statics.

use crate::table::SharedTable;
use std::sync::Arc;

/// A consumer that accepts a published table.
///
/// Any `Fn(SharedTable) + Send + Sync` closure is a callback.
///
/// # Example
///
/// ```rust
/// use implementors_core::{RegistrationCallback, SharedTable};
///
/// struct Discard;
///
/// impl RegistrationCallback for Discard {
///     fn register_implementors(&self, _table: SharedTable) {}
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot receive implementor tables",
    label = "missing `RegistrationCallback` implementation",
    note = "Implement `register_implementors`, or pass a closure taking `SharedTable`."
)]
pub trait RegistrationCallback: Send + Sync + 'static {
    /// Receive a table. Called synchronously, at most once per publish.
    fn register_implementors(&self, table: SharedTable);
}

impl<F> RegistrationCallback for F
where
    F: Fn(SharedTable) + Send + Sync + 'static,
{
    fn register_implementors(&self, table: SharedTable) {
        self(table)
    }
}

/// A callback shared between an environment and whoever installed it.
pub type SharedCallback = Arc<dyn RegistrationCallback>;

/// Where a published table is delivered.
pub trait Environment {
    /// The currently registered callback, if any.
    fn try_get_callback(&self) -> Option<SharedCallback>;

    /// Store a table for later pickup, replacing whatever was there.
    fn set_pending(&mut self, table: SharedTable);
}

impl<E: Environment + ?Sized> Environment for &mut E {
    fn try_get_callback(&self) -> Option<SharedCallback> {
        (**self).try_get_callback()
    }

    fn set_pending(&mut self, table: SharedTable) {
        (**self).set_pending(table)
    }
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn try_get_callback(&self) -> Option<SharedCallback> {
        (**self).try_get_callback()
    }

    fn set_pending(&mut self, table: SharedTable) {
        (**self).set_pending(table)
    }
}
