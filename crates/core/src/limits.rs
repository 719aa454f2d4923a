//! Scoring weights and selection limits
//!
//! These constants drive the relevance scorer and the ranker's selection
//! policy. The values are part of the engine's observable behavior: tests
//! assert on the result cap and the confidence floor, and changing a weight
//! reorders results.

/// Maximum number of hits a search may return (applied before the
/// confidence floor, so the floor can only shrink the list further).
pub const MAX_RESULTS: usize = 5;

/// Confidence floor: hits must score strictly above this to be surfaced.
pub const MIN_RELEVANCE: i32 = 10;

/// Queries shorter than this (in chars, after trimming) return no results.
pub const MIN_QUERY_CHARS: usize = 2;

/// Stems shorter than this (in chars) are discarded during expansion.
pub const MIN_STEM_CHARS: usize = 3;

/// Flat penalty when at least one query stem is absent from the haystack.
pub const MISSING_STEM_PENALTY: i32 = 20;

/// Bonus when the normalized query appears verbatim in the haystack.
pub const EXACT_PHRASE_BONUS: i32 = 50;

/// Per-stem bonus for a substring match in the record name.
pub const NAME_HIT_BONUS: i32 = 10;

/// Per-stem bonus for a substring match in the record keywords.
pub const KEYWORD_HIT_BONUS: i32 = 8;

/// Per-stem bonus for a substring match in the record description.
pub const DESCRIPTION_HIT_BONUS: i32 = 5;

/// Bonus when every query stem is present somewhere in the haystack.
///
/// Deliberately checked independently of [`MISSING_STEM_PENALTY`]; the two
/// are not symmetric and the asymmetry is load-bearing for ranking.
pub const ALL_STEMS_BONUS: i32 = 15;
