//! Member classification, key resolution, and the write path.

pub mod binder;
pub mod classifier;
pub mod resolver;
pub mod types;

pub use binder::{bind_member, invoke_hook};
pub use classifier::{Classification, ClassifiedMember, MemberClassifier, WalkOrder};
pub use resolver::{alternate_key, keys_match, resolve_key};
pub use types::{assign_slot, BindOutcome, Bindable, MemberDescriptor, MemberKind, MemberTable};
