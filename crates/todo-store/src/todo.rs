//! Todo Record
//!
//! A task's text and completion flag, plus the key the store files it under.

use serde::{Deserialize, Serialize};

/// Key of a record within a [`crate::TodoStore`]
///
/// Handed out by a per-store counter: strictly increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoKey(u64);

impl TodoKey {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for TodoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single task
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Todo {
    /// Task description, may be blank while pending an edit
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Todo {
    /// Create an open (not completed) task
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    /// True when the text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new("Buy milk");
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
        assert!(!todo.is_blank());
    }

    #[test]
    fn test_blank_detection() {
        assert!(Todo::new("").is_blank());
        assert!(Todo::new(" \t ").is_blank());
    }

    #[test]
    fn test_key_ordering_and_display() {
        assert!(TodoKey::new(1) < TodoKey::new(2));
        assert_eq!(TodoKey::new(7).to_string(), "#7");
    }

    #[test]
    fn test_key_serializes_as_number() {
        let json = serde_json::to_string(&TodoKey::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
