//! Member writes with the engine's log-and-skip discipline.

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::{debug, warn};

use crate::binding::types::{BindOutcome, Bindable, MemberDescriptor, MemberKind};
use crate::context::types::ContextValue;

/// Write `value` onto one member of `target`; `None` unbinds.
///
/// Returns whether the member was written. Every failure mode is logged
/// and skipped: binding proceeds member by member, and user code runs
/// inside `write_member`, so panics are contained here as well.
pub fn bind_member(
    target: &dyn Bindable,
    member: &MemberDescriptor,
    value: Option<ContextValue>,
) -> bool {
    if member.kind == MemberKind::Setter && member.arity != 1 {
        debug!(
            "skipping setter {}.{} with {} parameters",
            member.owner, member.name, member.arity
        );
        return false;
    }
    match catch_unwind(AssertUnwindSafe(|| target.write_member(member, value))) {
        Ok(BindOutcome::Written) => {
            debug!("bound {}.{} on {}", member.owner, member.name, target.type_label());
            true
        }
        Ok(BindOutcome::Mismatch { expected }) => {
            warn!(
                "type mismatch for {}.{} on {}: expected {}",
                member.owner,
                member.name,
                target.type_label(),
                expected
            );
            false
        }
        Ok(BindOutcome::NoSuchMember) => {
            warn!(
                "{} exposes no member {}.{}",
                target.type_label(),
                member.owner,
                member.name
            );
            false
        }
        Ok(BindOutcome::Failed(message)) => {
            warn!(
                "write to {}.{} on {} failed: {}",
                member.owner,
                member.name,
                target.type_label(),
                message
            );
            false
        }
        Err(_) => {
            warn!(
                "write to {}.{} on {} panicked",
                member.owner,
                member.name,
                target.type_label()
            );
            false
        }
    }
}

/// Invoke one post-construct hook; failures are logged and swallowed.
pub fn invoke_hook(target: &dyn Bindable, member: &MemberDescriptor) -> bool {
    match catch_unwind(AssertUnwindSafe(|| target.call_hook(member))) {
        Ok(BindOutcome::Written) => {
            debug!("ran hook {}.{} on {}", member.owner, member.name, target.type_label());
            true
        }
        Ok(outcome) => {
            warn!(
                "hook {}.{} on {} did not run: {:?}",
                member.owner,
                member.name,
                target.type_label(),
                outcome
            );
            false
        }
        Err(_) => {
            warn!(
                "hook {}.{} on {} panicked",
                member.owner,
                member.name,
                target.type_label()
            );
            false
        }
    }
}
