//! Text normalization
//!
//! Canonicalizes text so that orthographic variation does not cause missed
//! matches. Russian text commonly spells ё as е; both sides of every
//! comparison go through [`normalize`], so the two spellings collapse to
//! one form.

/// Lowercase the input and rewrite ё to е.
///
/// Total and pure: empty input normalizes to the empty string, and no
/// input can fail.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace('ё', "е")
}
