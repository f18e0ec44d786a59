//! The orchestrator: context events in, member writes out.

use std::sync::Arc;

use log::{debug, warn};

use crate::binding::binder::{bind_member, invoke_hook};
use crate::binding::classifier::{MemberClassifier, WalkOrder};
use crate::binding::resolver::{keys_match, resolve_key};
use crate::binding::types::{Bindable, MemberKind};
use crate::config::BindingConfig;
use crate::context::types::{ContextEvent, ContextListener, ContextView};
use crate::errors::VinculumError;
use crate::registry::TargetRegistry;

/// Keeps the injectable members of registered targets synchronized with a
/// context as it changes.
///
/// The link subscribes to a context as a [`ContextListener`]. A
/// registration event runs a full additive pass over the new target; an
/// added or removed key runs an incremental pass over every live target.
/// Apart from the weakly held registry the link is stateless across
/// events: each pass re-derives classification and key resolution against
/// current context contents, so a later event corrects whatever an
/// earlier skipped write left behind.
pub struct ContextLink {
    classifier: MemberClassifier,
    registry: TargetRegistry,
}

impl ContextLink {
    pub fn new(config: BindingConfig) -> Self {
        Self {
            classifier: MemberClassifier::new(config),
            registry: TargetRegistry::new(),
        }
    }

    pub fn config(&self) -> &BindingConfig {
        self.classifier.config()
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    /// Full additive pass for a newly registered target: bind every
    /// member whose key is currently set, then run the target's hooks.
    fn apply_initial(&self, context: &dyn ContextView, target: &Arc<dyn Bindable>) {
        let classification = self.classifier.classify(target.as_ref(), WalkOrder::Additive);
        debug!(
            "registering {} with {} injectable members",
            target.type_label(),
            classification.injectables.len()
        );
        for entry in &classification.injectables {
            let Some(key) = resolve_key(context, entry.candidate) else {
                // Not set is not the same as set-to-nothing: leave the
                // member exactly as constructed.
                continue;
            };
            let value = match entry.member.kind {
                MemberKind::Setter => context.get_hinted(&key, entry.member.type_hint),
                MemberKind::Field => context.get(&key),
            };
            bind_member(target.as_ref(), entry.member, value);
        }
        for hook in &classification.hooks {
            invoke_hook(target.as_ref(), hook);
        }
    }

    /// Incremental pass over all live targets for one changed key.
    fn apply_change(&self, context: &dyn ContextView, key: &str, order: WalkOrder) {
        for target in self.registry.snapshot() {
            let classification = self.classifier.classify(target.as_ref(), order);
            for entry in &classification.injectables {
                if !keys_match(key, entry.candidate) {
                    continue;
                }
                let value = match order {
                    WalkOrder::Additive => {
                        resolve_key(context, key).and_then(|resolved| match entry.member.kind {
                            MemberKind::Setter => {
                                context.get_hinted(&resolved, entry.member.type_hint)
                            }
                            MemberKind::Field => context.get(&resolved),
                        })
                    }
                    WalkOrder::Subtractive => None,
                };
                bind_member(target.as_ref(), entry.member, value);
            }
        }
    }
}

impl Default for ContextLink {
    fn default() -> Self {
        Self::new(BindingConfig::default())
    }
}

impl ContextListener for ContextLink {
    fn notify(
        &self,
        context: &dyn ContextView,
        key: Option<&str>,
        event: &ContextEvent,
    ) -> Result<bool, VinculumError> {
        match event {
            ContextEvent::Initial(payload) => {
                let target = payload.clone().ok_or_else(|| {
                    VinculumError::InvalidTarget("initial event carried no target".into())
                })?;
                self.apply_initial(context, &target);
                self.registry.add(&target);
            }
            ContextEvent::Added => match key {
                Some(key) => self.apply_change(context, key, WalkOrder::Additive),
                None => warn!("added event without a key"),
            },
            ContextEvent::Removed => match key {
                Some(key) => self.apply_change(context, key, WalkOrder::Subtractive),
                None => warn!("removed event without a key"),
            },
            other => {
                for target in self.registry.snapshot() {
                    warn!("ignoring {:?} event for {}", other, target.type_label());
                }
            }
        }
        Ok(!self.registry.is_empty())
    }
}
