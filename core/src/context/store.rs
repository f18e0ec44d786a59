//! Reference context store with synchronous change dispatch.

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::{Mutex, RwLock};

use crate::binding::types::Bindable;
use crate::context::types::{ContextEvent, ContextListener, ContextValue, ContextView};
use crate::errors::VinculumError;

/// String-keyed store of shared values with synchronous listener
/// dispatch: delivery completes before the mutating call returns, on the
/// mutating thread.
///
/// Locks are scoped to the backing maps only. Listener callbacks always
/// run with no store lock held, so a callback may re-enter the store,
/// read values, or mutate further keys.
pub struct InjectionContext {
    values: RwLock<HashMap<String, ContextValue>>,
    listeners: Mutex<Vec<Arc<dyn ContextListener>>>,
    disposed: AtomicBool,
}

impl InjectionContext {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            listeners: Mutex::new(Vec::new()),
            disposed: AtomicBool::new(false),
        }
    }

    /// Store a value under `key` and dispatch an added event. Overwrites
    /// dispatch the same way; listeners re-resolve against current
    /// contents either way.
    pub fn set<V: Any + Send + Sync>(&self, key: &str, value: V) {
        self.set_shared(key, Arc::new(value));
    }

    /// Store an already shared value, preserving `Arc` identity for
    /// values pushed into many targets.
    pub fn set_shared(&self, key: &str, value: ContextValue) {
        if self.disposed.load(Ordering::SeqCst) {
            warn!("set ignored on disposed context: {}", key);
            return;
        }
        self.values.write().insert(key.to_string(), value);
        self.dispatch(Some(key), &ContextEvent::Added);
    }

    /// Remove a key, dispatching a removed event when it was set.
    pub fn remove(&self, key: &str) -> bool {
        if self.disposed.load(Ordering::SeqCst) {
            warn!("remove ignored on disposed context: {}", key);
            return false;
        }
        let removed = self.values.write().remove(key).is_some();
        if removed {
            self.dispatch(Some(key), &ContextEvent::Removed);
        }
        removed
    }

    /// Register a listener, delivering the initial event with `payload`
    /// before this call returns. The listener is subscribed for future
    /// events only when it reports itself alive; contract violations
    /// propagate to the caller and leave nothing subscribed.
    ///
    /// Tracking an already subscribed listener re-delivers the initial
    /// event without subscribing it twice, so one listener can carry any
    /// number of targets.
    pub fn track(
        &self,
        listener: Arc<dyn ContextListener>,
        payload: Option<Arc<dyn Bindable>>,
    ) -> Result<bool, VinculumError> {
        if self.disposed.load(Ordering::SeqCst) {
            return Err(VinculumError::ContextDisposed);
        }
        let keep = listener.notify(self, None, &ContextEvent::Initial(payload))?;
        if keep {
            let mut listeners = self.listeners.lock();
            if !listeners.iter().any(|existing| Arc::ptr_eq(existing, &listener)) {
                listeners.push(listener);
            }
        }
        Ok(keep)
    }

    /// Notify listeners that the context is going away, then drop all
    /// state. Later registrations fail; later mutations are ignored.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.dispatch(None, &ContextEvent::Disposed);
        self.listeners.lock().clear();
        self.values.write().clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Number of keys currently set.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// Deliver one event to a snapshot of the listeners, then drop the
    /// ones that unsubscribed or failed.
    ///
    /// The snapshot keeps the listener lock out of callback scope;
    /// listeners registered mid-dispatch see only later events.
    fn dispatch(&self, key: Option<&str>, event: &ContextEvent) {
        let snapshot: Vec<Arc<dyn ContextListener>> = self.listeners.lock().clone();
        if snapshot.is_empty() {
            return;
        }
        let mut dropped: Vec<Arc<dyn ContextListener>> = Vec::new();
        for listener in &snapshot {
            match listener.notify(self, key, event) {
                Ok(true) => {}
                Ok(false) => {
                    debug!("listener unsubscribed after {:?} event", event);
                    dropped.push(Arc::clone(listener));
                }
                Err(err) => {
                    warn!("listener failed during {:?} event: {}", event, err);
                    dropped.push(Arc::clone(listener));
                }
            }
        }
        if !dropped.is_empty() {
            self.listeners
                .lock()
                .retain(|listener| !dropped.iter().any(|gone| Arc::ptr_eq(listener, gone)));
        }
    }
}

impl Default for InjectionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextView for InjectionContext {
    fn contains_key(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }

    fn get(&self, key: &str) -> Option<ContextValue> {
        self.values.read().get(key).cloned()
    }
}
