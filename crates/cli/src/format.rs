//! Plain-text rendering of engine results

use bizproc_engine::{ProcessRecord, ProcessSummary, SearchHit};

/// Render ranked hits as a numbered list.
pub fn format_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No matches found. Try different words or `list`.\n".to_string();
    }
    let mut out = String::new();
    for (i, hit) in hits.iter().enumerate() {
        out.push_str(&format!(
            "{}. [{}] {} (score {})\n",
            i + 1,
            hit.record.id,
            hit.record.name,
            hit.score
        ));
    }
    out
}

/// Render the full card for one record.
pub fn format_record(record: &ProcessRecord) -> String {
    let mut out = format!("[{}] {}\n\n{}\n", record.id, record.name, record.description);
    if !record.keywords.is_empty() {
        out.push_str(&format!("\nKeywords: {}\n", record.keywords));
    }
    out
}

/// Render the catalog listing.
pub fn format_summaries(summaries: &[ProcessSummary]) -> String {
    let mut out = String::new();
    for summary in summaries {
        out.push_str(&format!("[{}] {}\n", summary.id, summary.name));
    }
    out
}

/// Detect input that looks like a catalog id rather than a query.
///
/// Mirrors how the catalog codes its ids: an uppercase `B` category prefix
/// followed by a digit (`B1.6`). Spaces are stripped and the input is
/// uppercased, so `b1.6` routes to lookup too.
pub fn looks_like_id(input: &str) -> Option<String> {
    let clean: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    let mut chars = clean.chars();
    match (chars.next(), chars.next()) {
        (Some('B'), Some(digit)) if digit.is_ascii_digit() => Some(clean),
        _ => None,
    }
}
