//! Weakly held set of currently bound targets.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::binding::types::Bindable;

/// Registry of bound targets, held weakly so that registration never
/// extends a target's lifetime.
///
/// The lock covers the backing vector only. Callers take a [`snapshot`]
/// and bind outside the lock, so user code never runs while the registry
/// is held and a binding pass may register further targets.
///
/// [`snapshot`]: TargetRegistry::snapshot
#[derive(Default)]
pub struct TargetRegistry {
    entries: Mutex<Vec<Weak<dyn Bindable>>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Track a target without taking ownership of it.
    pub fn add(&self, target: &Arc<dyn Bindable>) {
        self.entries.lock().push(Arc::downgrade(target));
    }

    /// Copy the live targets out, pruning entries whose referent is gone.
    ///
    /// The surviving strong references keep every returned target alive
    /// for the duration of the caller's pass.
    pub fn snapshot(&self) -> Vec<Arc<dyn Bindable>> {
        let mut entries = self.entries.lock();
        let mut live = Vec::with_capacity(entries.len());
        entries.retain(|entry| match entry.upgrade() {
            Some(target) => {
                live.push(target);
                true
            }
            None => false,
        });
        live
    }

    /// Whether any entries exist, dead but not yet pruned ones included.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
