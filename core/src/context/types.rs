//! Context boundary types: values, events, and the traits the binding
//! engine consumes.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::binding::types::Bindable;
use crate::errors::VinculumError;

/// Shared, dynamically typed context entry.
///
/// Values are stored and handed to targets behind `Arc`, so one entry can
/// be pushed into any number of members without copying.
pub type ContextValue = Arc<dyn Any + Send + Sync>;

/// Change notification delivered to context listeners.
#[derive(Clone)]
pub enum ContextEvent {
    /// A target is being registered; carries the target payload.
    Initial(Option<Arc<dyn Bindable>>),
    /// A key was set (first write or overwrite).
    Added,
    /// A key was removed.
    Removed,
    /// The context itself is going away.
    Disposed,
}

impl fmt::Debug for ContextEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextEvent::Initial(payload) => f
                .debug_tuple("Initial")
                .field(&payload.as_ref().map(|target| target.type_label()))
                .finish(),
            ContextEvent::Added => write!(f, "Added"),
            ContextEvent::Removed => write!(f, "Removed"),
            ContextEvent::Disposed => write!(f, "Disposed"),
        }
    }
}

/// Read access to a context, as consumed by the binding engine.
///
/// Only presence and retrieval are required; the engine never mutates a
/// context it is bound to.
pub trait ContextView: Send + Sync {
    /// Whether the exact key is currently set.
    ///
    /// Presence is the authority here: a key set to any value, however
    /// unusable for a particular member, still counts as set.
    fn contains_key(&self, key: &str) -> bool;

    /// Fetch the value for an exact key.
    fn get(&self, key: &str) -> Option<ContextValue>;

    /// Fetch with an advisory expected-type label, used when resolving a
    /// setter argument. The default ignores the hint.
    fn get_hinted(&self, key: &str, hint: Option<&str>) -> Option<ContextValue> {
        let _ = hint;
        self.get(key)
    }
}

/// Subscription callback for context change events.
///
/// `key` is `Some` for `Added` and `Removed`, `None` otherwise. Delivery
/// is synchronous on the mutating thread. The `Ok(bool)` result is the
/// keep-alive signal: `Ok(false)` tells the context to stop notifying
/// this listener.
pub trait ContextListener: Send + Sync {
    fn notify(
        &self,
        context: &dyn ContextView,
        key: Option<&str>,
        event: &ContextEvent,
    ) -> Result<bool, VinculumError>;
}
