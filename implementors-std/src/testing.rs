//! Testing utilities for implementor tables.
//!
//! - [`RecordingCallback`]: records every table it receives
//! - [`CountingCallback`]: counts deliveries without keeping tables
//! - [`RecordingEnvironment`]: an environment that records pending writes

use implementors_core::{Environment, RegistrationCallback, SharedCallback, SharedTable};
use std::{
    cell::Cell,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

// ============================================================================
// Recording Callback
// ============================================================================

/// A callback that records all tables it receives.
///
/// Clones share the same record.
///
/// # Example
///
/// ```rust
/// use implementors_core::{ImplementorTable, RegistrationCallback};
/// use implementors_std::testing::RecordingCallback;
///
/// let recorder = RecordingCallback::new();
/// recorder.register_implementors(ImplementorTable::empty().into_shared());
/// assert_eq!(recorder.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingCallback {
    tables: Arc<Mutex<Vec<SharedTable>>>,
}

impl RecordingCallback {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded tables, oldest first.
    pub fn tables(&self) -> Vec<SharedTable> {
        self.tables.lock().unwrap().clone()
    }

    /// The most recently recorded table.
    pub fn last(&self) -> Option<SharedTable> {
        self.tables.lock().unwrap().last().cloned()
    }

    /// Number of tables received.
    pub fn count(&self) -> usize {
        self.tables.lock().unwrap().len()
    }

    /// Forget everything recorded.
    pub fn clear(&self) {
        self.tables.lock().unwrap().clear();
    }
}

impl RegistrationCallback for RecordingCallback {
    fn register_implementors(&self, table: SharedTable) {
        self.tables.lock().unwrap().push(table);
    }
}

// ============================================================================
// Counting Callback
// ============================================================================

/// A callback that counts invocations.
#[derive(Clone, Default)]
pub struct CountingCallback {
    count: Arc<AtomicUsize>,
}

impl CountingCallback {
    /// Create a new counting callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl RegistrationCallback for CountingCallback {
    fn register_implementors(&self, _table: SharedTable) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Recording Environment
// ============================================================================

/// An environment that keeps every pending write and counts callback lookups.
///
/// All recorded state is owned; a clone starts from a copy and diverges.
#[derive(Clone, Default)]
pub struct RecordingEnvironment {
    callback: Option<SharedCallback>,
    pending_writes: Vec<SharedTable>,
    lookups: Cell<usize>,
}

impl RecordingEnvironment {
    /// An environment with no callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment with `callback` installed.
    pub fn with_callback<C: RegistrationCallback>(callback: C) -> Self {
        Self {
            callback: Some(Arc::new(callback)),
            ..Self::default()
        }
    }

    /// Every table written to the pending slot, oldest first.
    pub fn pending_writes(&self) -> &[SharedTable] {
        &self.pending_writes
    }

    /// The current pending table.
    pub fn pending(&self) -> Option<&SharedTable> {
        self.pending_writes.last()
    }

    /// How many times the callback was looked up.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl Environment for RecordingEnvironment {
    fn try_get_callback(&self) -> Option<SharedCallback> {
        self.lookups.set(self.lookups.get() + 1);
        self.callback.clone()
    }

    fn set_pending(&mut self, table: SharedTable) {
        self.pending_writes.push(table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use implementors_core::{Delivery, ImplementorTable, publish};

    #[test]
    fn test_recording_environment_tracks_writes() {
        let mut env = RecordingEnvironment::new();
        let a = ImplementorTable::empty().into_shared();
        let b = ImplementorTable::empty().into_shared();

        publish(a.clone(), &mut env);
        publish(b.clone(), &mut env);

        assert_eq!(env.lookups(), 2);
        assert_eq!(env.pending_writes().len(), 2);
        assert!(Arc::ptr_eq(&env.pending_writes()[0], &a));
        assert!(Arc::ptr_eq(env.pending().unwrap(), &b));
    }

    #[test]
    fn test_recording_environment_clones_diverge() {
        let mut env = RecordingEnvironment::new();
        publish(ImplementorTable::empty().into_shared(), &mut env);

        let mut copy = env.clone();
        publish(ImplementorTable::empty().into_shared(), &mut copy);

        assert_eq!((env.lookups(), env.pending_writes().len()), (1, 1));
        assert_eq!((copy.lookups(), copy.pending_writes().len()), (2, 2));
    }

    #[test]
    fn test_recording_callback_history_and_clear() {
        let recorder = RecordingCallback::new();
        let first = ImplementorTable::empty().into_shared();
        let second = ImplementorTable::empty().into_shared();

        recorder.register_implementors(first.clone());
        recorder.register_implementors(second.clone());

        let tables = recorder.tables();
        assert_eq!(tables.len(), 2);
        assert!(Arc::ptr_eq(&tables[0], &first));
        assert!(Arc::ptr_eq(&tables[1], &second));

        recorder.clear();
        assert_eq!(recorder.count(), 0);
        assert!(recorder.last().is_none());
    }

    #[test]
    fn test_counting_callback() {
        let counter = CountingCallback::new();
        let mut env = RecordingEnvironment::with_callback(counter.clone());

        assert_eq!(
            publish(ImplementorTable::empty().into_shared(), &mut env),
            Delivery::Registered
        );
        assert_eq!(counter.count(), 1);
        assert!(env.pending_writes().is_empty());

        counter.reset();
        assert_eq!(counter.count(), 0);
    }
}
