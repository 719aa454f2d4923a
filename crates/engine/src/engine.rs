//! The `Engine` facade

use std::path::Path;
use std::sync::Arc;

use bizproc_core::{ProcessRecord, ProcessSummary, Result, SearchHit, MIN_QUERY_CHARS};
use bizproc_search::rank;
use bizproc_storage::{ProcessStore, Suggestion, SuggestionLog};
use tracing::debug;

/// Handle over one loaded catalog plus its suggestion log.
///
/// The catalog is immutable after load; every engine operation is a pure
/// read plus request-local computation, so one `Engine` can be shared
/// across threads (`Arc<Engine>` or `&Engine`) without further locking.
#[derive(Debug)]
pub struct Engine {
    store: Arc<ProcessStore>,
    suggestions: SuggestionLog,
}

impl Engine {
    /// Load the catalog from a JSON file and build an engine over it.
    ///
    /// Load failure (missing file, malformed JSON, invariant violations,
    /// empty catalog) is fatal: there is no silent fallback to an empty
    /// catalog, which would mask a provisioning problem by making every
    /// search come back empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = ProcessStore::load_path(path)?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Build an engine over an already-constructed store.
    pub fn with_store(store: Arc<ProcessStore>) -> Self {
        Engine {
            store,
            suggestions: SuggestionLog::new(),
        }
    }

    /// Answer a free-text query with ranked hits.
    ///
    /// Queries shorter than [`MIN_QUERY_CHARS`] after trimming return an
    /// empty list rather than an error; so do queries that match nothing.
    /// Results are capped at five and every hit clears the confidence
    /// floor.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let hits = rank(query, self.store.records());
        debug!(query, hits = hits.len(), "search");
        hits
    }

    /// Direct lookup by exact catalog id. Absence is `None`, not an error.
    pub fn get_by_id(&self, id: &str) -> Option<&ProcessRecord> {
        self.store.by_id(id)
    }

    /// Enumerate the catalog as `(id, name)` summaries in catalog order.
    pub fn get_all(&self) -> Vec<ProcessSummary> {
        self.store.summaries()
    }

    /// Capture user feedback. Never consulted by search.
    pub fn suggest(
        &self,
        user_id: i64,
        user_name: impl Into<String>,
        username: Option<String>,
        text: impl Into<String>,
    ) -> Suggestion {
        self.suggestions.record(user_id, user_name, username, text)
    }

    /// The suggestion log, for administrative tooling.
    pub fn suggestions(&self) -> &SuggestionLog {
        &self.suggestions
    }

    /// The underlying catalog store.
    pub fn store(&self) -> &ProcessStore {
        &self.store
    }
}
