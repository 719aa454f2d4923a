//! Relevance engine for the bizproc catalog
//!
//! This crate implements the four stages of query handling:
//! - text normalization (case fold plus ё/е unification)
//! - stem expansion for Russian morphology (fixed suffix rules plus an
//!   exception dictionary)
//! - rule-based relevance scoring by substring containment
//! - ranking and selection (stable descending sort, result cap,
//!   confidence floor)
//!
//! Everything here is pure computation over an immutable record slice;
//! per-query scratch state (stem sets, score accumulators) is
//! request-local, so concurrent callers can share one catalog freely.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod normalize;
pub mod rank;
pub mod scorer;
pub mod stem;

// Re-export commonly used functions
pub use normalize::normalize;
pub use rank::rank;
pub use scorer::relevance;
pub use stem::{stem_query, stems_for};
