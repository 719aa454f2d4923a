//! Rule-based relevance scoring
//!
//! A record's three searchable fields are normalized and concatenated into
//! one haystack; the query contributes a stem set plus its raw phrase. The
//! score is a signed integer built from independent additive rules - no
//! rule short-circuits another, and no floor or ceiling is applied here
//! (the ranker's confidence floor handles that).
//!
//! Containment is plain substring search on normalized text, not
//! word-boundary-aware: a stem may match inside a larger word, which is
//! what makes shallow stemming workable.

use bizproc_core::{
    ProcessRecord, StemSet, ALL_STEMS_BONUS, DESCRIPTION_HIT_BONUS, EXACT_PHRASE_BONUS,
    KEYWORD_HIT_BONUS, MISSING_STEM_PENALTY, NAME_HIT_BONUS,
};

use crate::normalize::normalize;

/// Score one record against a query's stem set and raw phrase.
///
/// Rules, in order, all accumulating onto a running total from zero:
/// 1. if any stem is absent from the haystack, a flat penalty;
/// 2. exact-phrase bonus when the normalized query occurs verbatim;
/// 3. per-stem bonus for name matches;
/// 4. per-stem bonus for keyword matches;
/// 5. per-stem bonus for description matches;
/// 6. a bonus when every stem is present in the haystack.
///
/// Rules 1 and 6 census the same condition on purpose and are not
/// magnitude-symmetric. They stay separate checks; collapsing them would
/// change ranking.
pub fn relevance(record: &ProcessRecord, stems: &StemSet, raw_query: &str) -> i32 {
    let name = normalize(&record.name);
    let description = normalize(&record.description);
    let keywords = normalize(&record.keywords);
    let haystack = format!("{name} {description} {keywords}");

    let mut score = 0;

    // 1. All-stems census: penalize partial coverage
    let found = stems
        .iter()
        .filter(|stem| haystack.contains(stem.as_str()))
        .count();
    if found < stems.len() {
        score -= MISSING_STEM_PENALTY;
    }

    // 2. Exact phrase
    if haystack.contains(&normalize(raw_query)) {
        score += EXACT_PHRASE_BONUS;
    }

    // 3-5. Per-field, per-stem bonuses
    for stem in stems {
        if name.contains(stem.as_str()) {
            score += NAME_HIT_BONUS;
        }
    }
    for stem in stems {
        if keywords.contains(stem.as_str()) {
            score += KEYWORD_HIT_BONUS;
        }
    }
    for stem in stems {
        if description.contains(stem.as_str()) {
            score += DESCRIPTION_HIT_BONUS;
        }
    }

    // 6. All-stems census again, rewarding full coverage
    let present = stems
        .iter()
        .filter(|stem| haystack.contains(stem.as_str()))
        .count();
    if present == stems.len() {
        score += ALL_STEMS_BONUS;
    }

    score
}
