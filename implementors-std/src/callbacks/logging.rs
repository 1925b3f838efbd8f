//! Logging wrapper for registration callbacks.

use implementors_core::{RegistrationCallback, SharedTable};

/// A callback that logs each table it receives, then forwards it.
pub struct LoggingCallback<C> {
    inner: C,
    name: &'static str,
}

impl<C> LoggingCallback<C> {
    /// Wrap `inner`, tagging log records with `name`.
    pub const fn new(inner: C, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The wrapped callback.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Clone> Clone for LoggingCallback<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<C: RegistrationCallback> RegistrationCallback for LoggingCallback<C> {
    fn register_implementors(&self, table: SharedTable) {
        #[cfg(feature = "tracing")]
        {
            let _span = tracing::info_span!("register_implementors", callback = %self.name).entered();
            tracing::info!(
                libraries = table.len(),
                descriptors = table.descriptor_count(),
                "received implementors table"
            );
            self.inner.register_implementors(table);
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = self.name;
            self.inner.register_implementors(table);
        }
    }
}
