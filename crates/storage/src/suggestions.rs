//! Append-only suggestion log
//!
//! Users of the search surface can leave free-text feedback ("this process
//! is missing", "wrong keywords"). The log is write-mostly, read only by
//! administrative tooling, and never consulted by the search engine.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One captured piece of user feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Transport-level user id of the author
    pub user_id: i64,
    /// Display name of the author
    pub user_name: String,
    /// Optional handle (e.g. a messenger username)
    pub username: Option<String>,
    /// The feedback text itself
    pub text: String,
    /// Capture time, UTC
    pub created_at: DateTime<Utc>,
}

/// Append-only, newest-first suggestion storage.
///
/// Interior mutability via `RwLock` keeps the surrounding engine handle
/// shareable (`&self` appends) while the catalog itself stays lock-free.
#[derive(Debug, Default)]
pub struct SuggestionLog {
    entries: RwLock<Vec<Suggestion>>,
}

impl SuggestionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one suggestion, timestamped now.
    pub fn record(
        &self,
        user_id: i64,
        user_name: impl Into<String>,
        username: Option<String>,
        text: impl Into<String>,
    ) -> Suggestion {
        let suggestion = Suggestion {
            user_id,
            user_name: user_name.into(),
            username,
            text: text.into(),
            created_at: Utc::now(),
        };
        debug!(user_id, "suggestion recorded");
        self.entries.write().push(suggestion.clone());
        suggestion
    }

    /// All suggestions, newest first.
    pub fn all(&self) -> Vec<Suggestion> {
        let mut entries = self.entries.read().clone();
        entries.reverse();
        entries
    }

    /// The `limit` most recent suggestions, newest first.
    pub fn recent(&self, limit: usize) -> Vec<Suggestion> {
        self.all().into_iter().take(limit).collect()
    }

    /// Number of stored suggestions.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
