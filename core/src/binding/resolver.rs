//! Candidate-key resolution between member names and live context keys.

use crate::context::types::ContextView;

/// Alternate spelling of a key, toggling the case of the first character
/// only (`"log"` and `"Log"` are alternates of each other). `None` when
/// the key is empty or its first character has no case to toggle.
pub fn alternate_key(key: &str) -> Option<String> {
    let first = key.chars().next()?;
    let toggled: String = if first.is_uppercase() {
        first.to_lowercase().collect()
    } else if first.is_lowercase() {
        first.to_uppercase().collect()
    } else {
        return None;
    };
    let mut alternate = toggled;
    alternate.push_str(&key[first.len_utf8()..]);
    Some(alternate)
}

/// Resolve a candidate key against a context: the exact spelling wins,
/// then the alternate capitalization.
///
/// `None` means the key is not set at all, which is distinct from a key
/// set to any value. Callers must leave the member untouched in that
/// case rather than writing an absent value.
pub fn resolve_key(context: &dyn ContextView, candidate: &str) -> Option<String> {
    if context.contains_key(candidate) {
        return Some(candidate.to_string());
    }
    let alternate = alternate_key(candidate)?;
    if context.contains_key(&alternate) {
        return Some(alternate);
    }
    None
}

/// Whether an event key pertains to a candidate key, by the same
/// exact-or-alternate rule as [`resolve_key`].
pub fn keys_match(event_key: &str, candidate: &str) -> bool {
    if event_key == candidate {
        return true;
    }
    match alternate_key(candidate) {
        Some(alternate) => event_key == alternate,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::store::InjectionContext;

    #[test]
    fn alternate_toggles_first_character_only() {
        assert_eq!(alternate_key("log").as_deref(), Some("Log"));
        assert_eq!(alternate_key("Log").as_deref(), Some("log"));
        assert_eq!(alternate_key("logLevel").as_deref(), Some("LogLevel"));
        assert_eq!(alternate_key("x").as_deref(), Some("X"));
    }

    #[test]
    fn caseless_keys_have_no_alternate() {
        assert_eq!(alternate_key(""), None);
        assert_eq!(alternate_key("_private"), None);
        assert_eq!(alternate_key("42wire"), None);
    }

    #[test]
    fn exact_match_beats_alternate() {
        let context = InjectionContext::new();
        context.set("log", 1u32);
        context.set("Log", 2u32);
        assert_eq!(resolve_key(&context, "log").as_deref(), Some("log"));
        assert_eq!(resolve_key(&context, "Log").as_deref(), Some("Log"));
    }

    #[test]
    fn alternate_is_consulted_when_exact_is_absent() {
        let context = InjectionContext::new();
        context.set("Log", 2u32);
        assert_eq!(resolve_key(&context, "log").as_deref(), Some("Log"));
    }

    #[test]
    fn unset_keys_resolve_to_none() {
        let context = InjectionContext::new();
        assert_eq!(resolve_key(&context, "log"), None);
        assert_eq!(resolve_key(&context, ""), None);
    }

    #[test]
    fn event_keys_match_exact_and_alternate_spellings() {
        assert!(keys_match("log", "log"));
        assert!(keys_match("Log", "log"));
        assert!(keys_match("log", "Log"));
        assert!(!keys_match("logger", "log"));
        assert!(!keys_match("lOg", "log"));
    }
}
