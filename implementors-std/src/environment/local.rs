//! An environment owned by its caller.

use implementors_core::{Environment, RegistrationCallback, SharedCallback, SharedTable};
use std::{fmt, sync::Arc};

/// An environment whose callback and pending slot live in the value itself.
///
/// # Example
///
/// ```rust
/// use implementors_core::{ImplementorTable, publish};
/// use implementors_std::environment::LocalEnvironment;
///
/// let mut env = LocalEnvironment::new();
/// let table = ImplementorTable::empty().into_shared();
///
/// publish(table, &mut env);
/// assert!(env.pending().is_some());
/// ```
#[derive(Default, Clone)]
pub struct LocalEnvironment {
    callback: Option<SharedCallback>,
    pending: Option<SharedTable>,
}

impl LocalEnvironment {
    /// An environment with no callback and an empty pending slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback.
    pub fn with_callback<C: RegistrationCallback>(mut self, callback: C) -> Self {
        self.callback = Some(Arc::new(callback));
        self
    }

    /// Set an already-shared callback.
    pub fn with_shared_callback(mut self, callback: SharedCallback) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Seed the pending slot.
    pub fn with_pending(mut self, table: SharedTable) -> Self {
        self.pending = Some(table);
        self
    }

    /// Whether a callback is set.
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Remove the callback, returning it.
    pub fn clear_callback(&mut self) -> Option<SharedCallback> {
        self.callback.take()
    }

    /// The table in the pending slot, if any.
    pub fn pending(&self) -> Option<&SharedTable> {
        self.pending.as_ref()
    }

    /// Empty the pending slot, returning its table.
    pub fn take_pending(&mut self) -> Option<SharedTable> {
        self.pending.take()
    }
}

impl Environment for LocalEnvironment {
    fn try_get_callback(&self) -> Option<SharedCallback> {
        self.callback.clone()
    }

    fn set_pending(&mut self, table: SharedTable) {
        self.pending = Some(table);
    }
}

impl fmt::Debug for LocalEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalEnvironment")
            .field("has_callback", &self.callback.is_some())
            .field("pending", &self.pending)
            .finish()
    }
}
