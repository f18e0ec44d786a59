//! # VINCULUM CORE LIBRARY
//!
//! **REACTIVE CONTEXT-TO-OBJECT BINDING ENGINE**
//!
//! Keeps the injectable members of registered target objects synchronized
//! with a mutable key-value context. Targets declare members in static
//! tables; the engine classifies them under naming conventions, resolves
//! candidate keys against the live context, and writes shared values in
//! and out as keys come and go.
//!
//! **ARCHITECTURE**:
//! - `context`: value store, change events, and the listener boundary
//! - `binding`: member classification, key resolution, and the write path
//! - `registry`: weakly held set of bound targets
//! - `link`: the orchestrator subscribing the two sides together
//!
//! **GUARANTEES**:
//! - Synchronous dispatch: bindings settle before the mutating call returns
//! - Per-member isolation: a failed write is logged and skipped, never fatal
//! - Weak registration: binding never extends a target's lifetime

pub mod api;
pub mod binding;
pub mod config;
pub mod context;
pub mod errors;
pub mod link;
pub mod registry;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use crate::api::*;

    static GAUGE_MEMBERS: [MemberDescriptor; 1] =
        [MemberDescriptor::field("Gauge", "inject_reading")];
    static GAUGE_TABLES: [MemberTable; 1] =
        [MemberTable { owner: "Gauge", members: &GAUGE_MEMBERS }];

    struct Gauge {
        reading: Mutex<Option<Arc<u64>>>,
    }

    impl Bindable for Gauge {
        fn member_tables(&self) -> &'static [MemberTable] {
            &GAUGE_TABLES
        }

        fn write_member(
            &self,
            member: &MemberDescriptor,
            value: Option<ContextValue>,
        ) -> BindOutcome {
            match (member.owner, member.name) {
                ("Gauge", "inject_reading") => assign_slot(&self.reading, value),
                _ => BindOutcome::NoSuchMember,
            }
        }
    }

    #[test]
    fn end_to_end_bind_and_unbind() {
        let context = InjectionContext::new();
        let link = Arc::new(ContextLink::default());
        let gauge = Arc::new(Gauge { reading: Mutex::new(None) });

        context.set("reading", 41u64);
        let payload: Arc<dyn Bindable> = gauge.clone();
        assert!(context.track(link, Some(payload)).unwrap());
        assert_eq!(gauge.reading.lock().as_deref(), Some(&41));

        context.set("reading", 42u64);
        assert_eq!(gauge.reading.lock().as_deref(), Some(&42));

        context.remove("reading");
        assert!(gauge.reading.lock().is_none());
    }

    #[test]
    fn default_link_uses_default_conventions() {
        let link = ContextLink::default();
        assert_eq!(link.config().field_prefix, DEFAULT_FIELD_PREFIX);
        assert_eq!(link.config().setter_prefix, DEFAULT_SETTER_PREFIX);
    }
}
