//! Draft records for pending create operations
//!
//! A draft is the unsaved, in-progress field values of a create form.
//! Edits never mutate a draft in place; each keystroke produces a new
//! draft with one field replaced, and the state layer swaps it in.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Partially-filled mapping from field name to string value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft(HashMap<String, String>);

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field, if it has ever been edited
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// New draft equal to this one with a single field replaced
    pub fn with(&self, field: &str, value: &str) -> Self {
        let mut next = self.0.clone();
        next.insert(field.to_string(), value.to_string());
        Self(next)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
