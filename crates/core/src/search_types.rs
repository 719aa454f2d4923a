//! Core search types
//!
//! This module defines the types exchanged between the relevance engine and
//! its callers:
//! - StemSet: deduplicated lowercase stems for one query
//! - SearchHit: a catalog record together with its relevance score
//!
//! Insertion order of a stem set is irrelevant to scoring (all rules are
//! additive over set membership), but a `BTreeSet` keeps iteration
//! deterministic, which keeps debug output and tests stable.

use crate::types::ProcessRecord;
use std::collections::BTreeSet;

/// Deduplicated lowercase stems derived from a query.
pub type StemSet = BTreeSet<String>;

/// One ranked search result: the matching record plus its signed relevance
/// score. Scores surfaced by the ranker are always strictly above the
/// confidence floor; raw scorer output may be negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// The matching catalog record
    pub record: ProcessRecord,

    /// Relevance score against the query that produced this hit
    pub score: i32,
}

impl SearchHit {
    /// Create a hit from a record and its score.
    pub fn new(record: ProcessRecord, score: i32) -> Self {
        SearchHit { record, score }
    }
}
