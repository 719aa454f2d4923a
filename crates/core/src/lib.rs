//! Core types for bizproc
//!
//! This crate defines the foundational types used throughout the system:
//! - ProcessRecord: one catalog entry (id, name, description, keywords)
//! - ProcessSummary: the (id, name) projection used for catalog listings
//! - StemSet: deduplicated lowercase stems derived from a query
//! - SearchHit: a scored catalog record produced by the ranker
//! - Error: error type hierarchy
//! - Scoring and selection constants (weights, caps, floors)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod search_types;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use limits::{
    ALL_STEMS_BONUS, DESCRIPTION_HIT_BONUS, EXACT_PHRASE_BONUS, KEYWORD_HIT_BONUS, MAX_RESULTS,
    MIN_QUERY_CHARS, MIN_RELEVANCE, MIN_STEM_CHARS, MISSING_STEM_PENALTY, NAME_HIT_BONUS,
};
pub use search_types::{SearchHit, StemSet};
pub use types::{ProcessRecord, ProcessSummary, MISSING_DESCRIPTION};
