//! Public API surface, re-exported in one flat namespace.

pub use crate::binding::{
    alternate_key, assign_slot, bind_member, invoke_hook, keys_match, resolve_key, BindOutcome,
    Bindable, Classification, ClassifiedMember, MemberClassifier, MemberDescriptor, MemberKind,
    MemberTable, WalkOrder,
};
pub use crate::config::{BindingConfig, DEFAULT_FIELD_PREFIX, DEFAULT_SETTER_PREFIX};
pub use crate::context::{
    ContextEvent, ContextListener, ContextValue, ContextView, InjectionContext,
};
pub use crate::errors::VinculumError;
pub use crate::link::ContextLink;
pub use crate::registry::TargetRegistry;
