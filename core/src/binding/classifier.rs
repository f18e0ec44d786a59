//! Member classification: turns a target's member tables into an ordered
//! injection plan.

use crate::binding::types::{Bindable, MemberDescriptor, MemberKind};
use crate::config::BindingConfig;

/// Direction a context event moves member state in.
///
/// The two polarities walk the hierarchy in opposite orders so that
/// derived state is built on top of base state and torn down before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOrder {
    /// Registration and added keys: base levels first, fields before
    /// setters within a level.
    Additive,
    /// Removed keys: derived levels first, setters before fields within a
    /// level.
    Subtractive,
}

/// An injectable member paired with its candidate context key.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedMember {
    pub member: &'static MemberDescriptor,
    /// Candidate key before resolution against a live context: an
    /// explicit override when one is present, else the prefix-stripped
    /// member name.
    pub candidate: &'static str,
}

/// Ordered classification of one target for one event polarity.
#[derive(Debug)]
pub struct Classification {
    pub injectables: Vec<ClassifiedMember>,
    /// Post-construct hooks in declaration order, base level first.
    /// Meaningful on registration only.
    pub hooks: Vec<&'static MemberDescriptor>,
}

/// Walks member tables into injection plans under configured naming
/// conventions.
///
/// Classification is stateless and re-derived per event, so a target's
/// plan always reflects the current configuration and nothing is cached
/// across events.
#[derive(Debug, Clone)]
pub struct MemberClassifier {
    config: BindingConfig,
}

impl MemberClassifier {
    pub fn new(config: BindingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Produce the ordered injection plan for `target` under `order`.
    pub fn classify(&self, target: &dyn Bindable, order: WalkOrder) -> Classification {
        let tables = target.member_tables();
        let mut classification = Classification {
            injectables: Vec::new(),
            hooks: Vec::new(),
        };

        for table in tables {
            for member in table.members {
                if member.post_construct {
                    classification.hooks.push(member);
                }
            }
        }

        match order {
            WalkOrder::Additive => {
                for table in tables {
                    self.collect(table.members, MemberKind::Field, &mut classification.injectables);
                    self.collect(table.members, MemberKind::Setter, &mut classification.injectables);
                }
            }
            WalkOrder::Subtractive => {
                for table in tables.iter().rev() {
                    self.collect(table.members, MemberKind::Setter, &mut classification.injectables);
                    self.collect(table.members, MemberKind::Field, &mut classification.injectables);
                }
            }
        }

        classification
    }

    fn collect(
        &self,
        members: &'static [MemberDescriptor],
        kind: MemberKind,
        out: &mut Vec<ClassifiedMember>,
    ) {
        for member in members {
            if member.kind != kind || member.post_construct {
                continue;
            }
            if let Some(candidate) = self.candidate_key(member) {
                out.push(ClassifiedMember { member, candidate });
            }
        }
    }

    /// Candidate key for one member, or `None` when the member is not
    /// injectable under the current conventions.
    ///
    /// Key precedence: a non-empty resource name, then an explicit name,
    /// then the prefix-stripped declared name.
    fn candidate_key(&self, member: &'static MemberDescriptor) -> Option<&'static str> {
        if member.kind == MemberKind::Setter && member.arity != 1 {
            return None;
        }
        let prefix = match member.kind {
            MemberKind::Field => self.config.field_prefix.as_str(),
            MemberKind::Setter => self.config.setter_prefix.as_str(),
        };
        let stripped = member.name.strip_prefix(prefix);
        if stripped.is_none() && !member.inject && member.resource.is_none() {
            return None;
        }
        if let Some(resource) = member.resource {
            if !resource.is_empty() {
                return Some(resource);
            }
        }
        if let Some(named) = member.named {
            return Some(named);
        }
        Some(stripped.unwrap_or(member.name))
    }
}

impl Default for MemberClassifier {
    fn default() -> Self {
        Self::new(BindingConfig::default())
    }
}
