//! A process-wide environment.
//!
//! Mirrors what a documentation page does with its window object: one
//! callback slot, one pending slot, both shared by everything in the process.
//! Poisoned locks are recovered; the slots only ever hold whole values.

use implementors_core::{
    Delivery, Environment, RegistrationCallback, SharedCallback, SharedTable, publish,
};
use std::sync::{Arc, PoisonError, RwLock};

static CALLBACK: RwLock<Option<SharedCallback>> = RwLock::new(None);
static PENDING: RwLock<Option<SharedTable>> = RwLock::new(None);

/// Handle onto the process-wide callback and pending slots.
///
/// The handle carries no state; every instance sees the same slots.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalEnvironment;

impl GlobalEnvironment {
    /// Install the process-wide callback, returning the one it replaced.
    pub fn install_callback<C: RegistrationCallback>(callback: C) -> Option<SharedCallback> {
        Self::install_shared_callback(Arc::new(callback))
    }

    /// Install an already-shared callback, returning the one it replaced.
    pub fn install_shared_callback(callback: SharedCallback) -> Option<SharedCallback> {
        let previous = CALLBACK
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(callback);
        #[cfg(feature = "tracing")]
        tracing::debug!(replaced = previous.is_some(), "installed implementors callback");
        previous
    }

    /// Remove the process-wide callback.
    pub fn uninstall_callback() -> Option<SharedCallback> {
        CALLBACK
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Whether a process-wide callback is installed.
    pub fn has_callback() -> bool {
        CALLBACK
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The table currently parked in the process-wide pending slot.
    pub fn pending() -> Option<SharedTable> {
        PENDING
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Empty the process-wide pending slot, returning its table.
    pub fn take_pending() -> Option<SharedTable> {
        PENDING
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Environment for GlobalEnvironment {
    fn try_get_callback(&self) -> Option<SharedCallback> {
        // Cloned out so the lock is released before the callback runs.
        CALLBACK
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_pending(&mut self, table: SharedTable) {
        let previous = PENDING
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(table);
        #[cfg(feature = "tracing")]
        if previous.is_some() {
            tracing::debug!("replaced pending implementors table");
        }
        drop(previous);
    }
}

/// Publish `table` into the process-wide environment.
pub fn publish_global(table: SharedTable) -> Delivery {
    publish(table, &mut GlobalEnvironment)
}
