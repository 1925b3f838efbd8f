//! Forwarding one table to several callbacks.

use implementors_core::{RegistrationCallback, SharedCallback, SharedTable};
use std::sync::Arc;

/// A callback that forwards every table to each of its targets, in the order
/// they were added.
///
/// All targets receive the same [`SharedTable`].
#[derive(Clone, Default)]
pub struct FanoutCallback {
    targets: Vec<SharedCallback>,
}

impl FanoutCallback {
    /// A fanout with no targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target.
    pub fn with<C: RegistrationCallback>(mut self, callback: C) -> Self {
        self.targets.push(Arc::new(callback));
        self
    }

    /// Add an already-shared target.
    pub fn with_shared(mut self, callback: SharedCallback) -> Self {
        self.targets.push(callback);
        self
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether there are no targets.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl RegistrationCallback for FanoutCallback {
    fn register_implementors(&self, table: SharedTable) {
        for target in &self.targets {
            target.register_implementors(Arc::clone(&table));
        }
    }
}
