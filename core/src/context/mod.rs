//! Context-side types: the value store and the listener boundary.

pub mod store;
pub mod types;

pub use store::InjectionContext;
pub use types::{ContextEvent, ContextListener, ContextValue, ContextView};
