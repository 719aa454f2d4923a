//! Engine facade for bizproc
//!
//! Wires the immutable process catalog to the relevance engine behind the
//! three operations presentation layers consume:
//! - `search`: free-text query to ranked hits
//! - `get_by_id`: direct lookup bypassing ranking
//! - `get_all`: catalog enumeration for browsing UIs
//!
//! Plus the feedback capture path (`suggest`), which the search engine
//! itself never reads.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod engine;

pub use engine::Engine;

// Re-export the types callers need alongside the facade
pub use bizproc_core::{
    Error, ProcessRecord, ProcessSummary, Result, SearchHit, StemSet, MAX_RESULTS,
    MIN_QUERY_CHARS, MIN_RELEVANCE,
};
pub use bizproc_storage::{ProcessStore, Suggestion, SuggestionLog};
