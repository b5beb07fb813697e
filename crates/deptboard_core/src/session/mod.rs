//! Per-user session state for in-progress form editing.
//!
//! # Responsibility
//! - Hold transient field values for at most one in-progress record per page,
//!   grouped under an opaque session prefix.
//! - Support single-key removal and prefix-based bulk purge on commit.
//!
//! # Invariants
//! - The store is owned by the caller and passed by reference into page
//!   functions; nothing here is process-global.
//! - State never outlives the process and is never shared across sessions.

use std::collections::BTreeMap;

/// Marker key holding the opaque prefix of the current in-progress project.
pub const CURRENT_PROJECT_KEY: &str = "current_project";

/// A transient value staged by a form widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionValue {
    /// Single-valued input (text field, single select).
    Text(String),
    /// Multi-valued input (multi select, repeated rows), order preserved.
    List(Vec<String>),
}

/// Flat per-session key-value store.
#[derive(Debug, Default)]
pub struct SessionStore {
    values: BTreeMap<String, SessionValue>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), SessionValue::Text(value.into()));
    }

    pub fn set_list(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.values.insert(key.into(), SessionValue::List(values));
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(SessionValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        match self.values.get(key) {
            Some(SessionValue::List(values)) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<SessionValue> {
        self.values.remove(key)
    }

    /// Removes every entry whose key starts with `prefix`.
    ///
    /// Returns the number of removed entries. This is the commit-time cleanup
    /// for one in-progress record's staged fields.
    pub fn remove_prefix(&mut self, prefix: &str) -> usize {
        let before = self.values.len();
        self.values.retain(|key, _| !key.starts_with(prefix));
        before - self.values.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Builds the session key for one staged field of an in-progress record.
pub fn field_key(prefix: &str, field: &str) -> String {
    format!("{prefix}.{field}")
}

#[cfg(test)]
mod tests {
    use super::{field_key, SessionStore};

    #[test]
    fn remove_prefix_only_touches_matching_keys() {
        let mut session = SessionStore::new();
        session.set_text(field_key("abc", "title"), "T");
        session.set_text(field_key("abc", "code"), "C");
        session.set_text(field_key("xyz", "title"), "other");
        session.set_text("unrelated", "kept");

        let removed = session.remove_prefix("abc");
        assert_eq!(removed, 2);
        assert!(!session.contains(&field_key("abc", "title")));
        assert_eq!(session.get_text(&field_key("xyz", "title")), Some("other"));
        assert_eq!(session.get_text("unrelated"), Some("kept"));
    }

    #[test]
    fn text_and_list_values_do_not_alias() {
        let mut session = SessionStore::new();
        session.set_list("members", vec!["a".to_string(), "b".to_string()]);
        assert_eq!(session.get_text("members"), None);
        assert_eq!(session.get_list("members").map(<[String]>::len), Some(2));
    }
}
