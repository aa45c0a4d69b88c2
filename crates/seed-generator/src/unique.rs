//! Session-scoped uniqueness tracking for generated emails.

use std::collections::HashSet;

/// Remembers every email handed out by one generator.
///
/// Uniqueness is only guaranteed within this tracker, never against rows that
/// already exist in the target table.
#[derive(Debug, Default)]
pub struct EmailTracker {
    seen: HashSet<String>,
}

impl EmailTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `email`. Returns `false` if it was already handed out.
    pub fn insert(&mut self, email: &str) -> bool {
        if self.seen.contains(email) {
            return false;
        }
        self.seen.insert(email.to_string())
    }

    pub fn contains(&self, email: &str) -> bool {
        self.seen.contains(email)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
