//! Target-side binding types: member descriptors and the capability trait
//! targets implement to accept injected values.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::context::types::ContextValue;

/// What kind of member a descriptor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Setter,
}

/// Static metadata for one member declared at one level of a target.
///
/// Descriptors are plain data built in `const` position, so a type's
/// member tables live in statics and cost nothing per instance. The
/// optional markers mirror what a declaration site can state about a
/// member: force injection, rename its key, or mark it as a lifecycle
/// hook.
#[derive(Debug, Clone, Copy)]
pub struct MemberDescriptor {
    /// Name of the declaring level. Together with `name` this addresses
    /// the member unambiguously when levels shadow each other.
    pub owner: &'static str,
    /// Declared member name, prefix included.
    pub name: &'static str,
    pub kind: MemberKind,
    /// Setter parameter count; fields carry 0. Only single-argument
    /// setters are injectable.
    pub arity: usize,
    /// Force injection regardless of naming convention.
    pub inject: bool,
    /// Explicit key override.
    pub named: Option<&'static str>,
    /// Resource marker: forces injection, and a non-empty name also
    /// overrides the key.
    pub resource: Option<&'static str>,
    /// Lifecycle hook invoked after a registration pass; never bound.
    pub post_construct: bool,
    /// Advisory expected-type label for hinted lookups and mismatch logs.
    pub type_hint: Option<&'static str>,
}

impl MemberDescriptor {
    pub const fn field(owner: &'static str, name: &'static str) -> Self {
        Self {
            owner,
            name,
            kind: MemberKind::Field,
            arity: 0,
            inject: false,
            named: None,
            resource: None,
            post_construct: false,
            type_hint: None,
        }
    }

    pub const fn setter(owner: &'static str, name: &'static str, arity: usize) -> Self {
        Self {
            kind: MemberKind::Setter,
            arity,
            ..Self::field(owner, name)
        }
    }

    /// A post-construct hook member.
    pub const fn hook(owner: &'static str, name: &'static str) -> Self {
        Self {
            kind: MemberKind::Setter,
            post_construct: true,
            ..Self::field(owner, name)
        }
    }

    pub const fn with_inject(mut self) -> Self {
        self.inject = true;
        self
    }

    pub const fn with_named(mut self, key: &'static str) -> Self {
        self.named = Some(key);
        self
    }

    pub const fn with_resource(mut self, name: &'static str) -> Self {
        self.resource = Some(name);
        self
    }

    pub const fn with_type_hint(mut self, label: &'static str) -> Self {
        self.type_hint = Some(label);
        self
    }
}

/// One level of a target's declared-member hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct MemberTable {
    /// Declaring level name, matching the `owner` of its members.
    pub owner: &'static str,
    pub members: &'static [MemberDescriptor],
}

/// Result of asking a target to write one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOutcome {
    /// The value was written, or the member was cleared.
    Written,
    /// The value's concrete type did not fit the member. The member must
    /// be left untouched.
    Mismatch {
        /// The type the member expected.
        expected: &'static str,
    },
    /// The descriptor does not correspond to a member of this target.
    NoSuchMember,
    /// The write itself failed.
    Failed(String),
}

/// Capability trait a target implements to expose injectable members.
///
/// The member tables replace reflective hierarchy walks: a type that
/// embeds another level lists that level's table before its own, most
/// base first. Visibility is settled at compile time, because the impl
/// lives next to the type and writes whatever it can reach.
pub trait Bindable: Send + Sync {
    /// Ordered member tables, most base level first.
    fn member_tables(&self) -> &'static [MemberTable];

    /// Write `value` to the member addressed by `member`; `None` clears
    /// it. A mismatched value must leave the member as it was.
    fn write_member(&self, member: &MemberDescriptor, value: Option<ContextValue>) -> BindOutcome;

    /// Invoke a post-construct hook member.
    fn call_hook(&self, member: &MemberDescriptor) -> BindOutcome {
        let _ = member;
        BindOutcome::NoSuchMember
    }

    /// Short label for log lines; defaults to the most derived level.
    fn type_label(&self) -> &'static str {
        self.member_tables()
            .last()
            .map(|table| table.owner)
            .unwrap_or("<target>")
    }
}

/// Write a downcast value into a `Mutex<Option<Arc<T>>>` field slot.
///
/// The standard shape for an injected member: `None` clears the slot, a
/// value of the wrong concrete type reports a mismatch and leaves the
/// slot untouched.
pub fn assign_slot<T: Send + Sync + 'static>(
    slot: &Mutex<Option<Arc<T>>>,
    value: Option<ContextValue>,
) -> BindOutcome {
    match value {
        None => {
            *slot.lock() = None;
            BindOutcome::Written
        }
        Some(value) => match value.downcast::<T>() {
            Ok(typed) => {
                *slot.lock() = Some(typed);
                BindOutcome::Written
            }
            Err(_) => BindOutcome::Mismatch {
                expected: std::any::type_name::<T>(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_builders_compose_in_const_position() {
        const MEMBER: MemberDescriptor =
            MemberDescriptor::field("Pane", "console").with_inject().with_named("console_out");
        assert_eq!(MEMBER.owner, "Pane");
        assert!(MEMBER.inject);
        assert_eq!(MEMBER.named, Some("console_out"));
        assert_eq!(MEMBER.kind, MemberKind::Field);
    }

    #[test]
    fn hook_descriptors_are_never_fields() {
        const HOOK: MemberDescriptor = MemberDescriptor::hook("Pane", "wire_up");
        assert!(HOOK.post_construct);
        assert_eq!(HOOK.kind, MemberKind::Setter);
    }

    #[test]
    fn assign_slot_writes_clears_and_rejects() {
        let slot: Mutex<Option<Arc<String>>> = Mutex::new(None);

        let written = assign_slot(&slot, Some(Arc::new("ready".to_string()) as ContextValue));
        assert_eq!(written, BindOutcome::Written);
        assert_eq!(slot.lock().as_deref(), Some(&"ready".to_string()));

        let mismatch = assign_slot(&slot, Some(Arc::new(3u64) as ContextValue));
        assert!(matches!(mismatch, BindOutcome::Mismatch { .. }));
        assert_eq!(slot.lock().as_deref(), Some(&"ready".to_string()));

        assert_eq!(assign_slot(&slot, None), BindOutcome::Written);
        assert!(slot.lock().is_none());
    }
}
