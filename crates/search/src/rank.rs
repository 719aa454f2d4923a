//! Ranking and selection
//!
//! Runs the scorer over the whole catalog and applies the two-stage
//! selection policy: cap the list at [`MAX_RESULTS`] first, then drop
//! anything at or below [`MIN_RELEVANCE`]. The cap bounds the list for
//! presentation; the floor demands a minimum confidence before a match is
//! surfaced at all. A record that scrapes into the top five but sits below
//! the floor is dropped rather than shown as a weak suggestion.

use bizproc_core::{ProcessRecord, SearchHit, MAX_RESULTS, MIN_RELEVANCE};
use tracing::trace;

use crate::scorer::relevance;
use crate::stem::stem_query;

/// Rank catalog records against a free-text query.
///
/// Tokenizes on whitespace (an all-whitespace query yields no results),
/// unions the stem sets of all tokens, scores every record, and selects
/// per the cap-then-floor policy. The sort is stable and descending, so
/// equal scores keep catalog order.
pub fn rank(query: &str, records: &[ProcessRecord]) -> Vec<SearchHit> {
    if query.split_whitespace().next().is_none() {
        return Vec::new();
    }

    let stems = stem_query(query);
    trace!(?stems, "query expanded");

    let mut hits: Vec<SearchHit> = records
        .iter()
        .filter_map(|record| {
            let score = relevance(record, &stems, query);
            (score > 0).then(|| SearchHit::new(record.clone(), score))
        })
        .collect();

    // Stable: ties keep catalog (encounter) order
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(MAX_RESULTS);
    hits.retain(|hit| hit.score > MIN_RELEVANCE);
    hits
}
