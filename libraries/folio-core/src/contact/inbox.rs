/// In-memory store of delivered contact submissions
use super::ContactSubmission;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Number of submissions kept before the oldest are evicted
pub const DEFAULT_INBOX_CAPACITY: usize = 100;

/// A delivered submission with its receipt metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl StoredSubmission {
    fn from_submission(submission: ContactSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            created_at: Utc::now(),
            read: false,
        }
    }
}

/// Bounded, process-local inbox. Contents vanish on restart.
#[derive(Debug)]
pub struct Inbox {
    capacity: usize,
    entries: Mutex<VecDeque<StoredSubmission>>,
}

impl Inbox {
    /// Create an inbox holding at most `capacity` submissions
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(VecDeque::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, VecDeque<StoredSubmission>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a submission, evicting the oldest one when full
    pub fn record(&self, submission: ContactSubmission) -> StoredSubmission {
        let stored = StoredSubmission::from_submission(submission);
        let mut entries = self.entries();
        if entries.len() == self.capacity {
            entries.pop_back();
        }
        entries.push_front(stored.clone());
        stored
    }

    /// Stored submissions, newest first
    pub fn list(&self) -> Vec<StoredSubmission> {
        self.entries().iter().cloned().collect()
    }

    /// Flag a submission as read. Returns false for an unknown id.
    pub fn mark_read(&self, id: Uuid) -> bool {
        match self.entries().iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.read = true;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new(DEFAULT_INBOX_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(subject: &str) -> ContactSubmission {
        ContactSubmission::new("Jane", "jane@x.com", subject, "Hello")
    }

    #[test]
    fn test_list_is_newest_first() {
        let inbox = Inbox::new(10);
        inbox.record(submission("first"));
        inbox.record(submission("second"));

        let subjects: Vec<String> = inbox.list().into_iter().map(|s| s.subject).collect();
        assert_eq!(subjects, vec!["second", "first"]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let inbox = Inbox::new(2);
        inbox.record(submission("a"));
        inbox.record(submission("b"));
        inbox.record(submission("c"));

        let subjects: Vec<String> = inbox.list().into_iter().map(|s| s.subject).collect();
        assert_eq!(subjects, vec!["c", "b"]);
        assert_eq!(inbox.len(), 2);
    }

    #[test]
    fn test_mark_read() {
        let inbox = Inbox::default();
        let stored = inbox.record(submission("hello"));

        assert!(inbox.mark_read(stored.id));
        assert!(inbox.list()[0].read);
        assert!(!inbox.mark_read(Uuid::new_v4()));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let inbox = Inbox::new(0);
        inbox.record(submission("only"));
        assert_eq!(inbox.capacity(), 1);
        assert_eq!(inbox.len(), 1);
    }
}
