//! Stem expansion for Russian query words
//!
//! Matching is substring containment, so a "stem" here is any truncated or
//! variant spelling of a word that is likely to occur inside its inflected
//! forms. Expansion is deliberately shallow: a fixed, ordered suffix-rule
//! table plus an exception dictionary for high-frequency domain words the
//! rules get wrong. This is not general morphology and is not meant to be.
//!
//! All length arithmetic counts `char`s, never bytes: Cyrillic letters are
//! two bytes in UTF-8 and byte-based truncation would split a letter.

use bizproc_core::{StemSet, MIN_STEM_CHARS};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::normalize::normalize;

/// Adjective-like endings (gendered/plural adjective forms), stripped as
/// two chars. Checked before the noun endings; `ой` appears in both tables
/// and belongs to this branch.
const ADJECTIVE_ENDINGS: &[&str] = &["ой", "ый", "ий", "ая", "яя", "ое", "ее", "ые", "ие"];

/// Noun case endings (plural/instrumental/prepositional), stripped as two
/// chars, with an extra three-char strip for words longer than five chars.
/// `ами`/`ями` are matched as written but still stripped as two chars,
/// exactly as the rule table has always behaved.
const NOUN_ENDINGS: &[&str] = &[
    "ах", "ях", "ам", "ям", "ами", "ями", "ов", "ев", "ом", "ем", "ой", "ей",
];

/// Single-character vowel/soft-sign endings, stripped as one char.
const SINGLE_ENDINGS: &[&str] = &["у", "ю", "а", "я", "о", "е", "ь"];

/// Irregular high-frequency domain words mapped to explicit stems the
/// suffix rules cannot produce (e.g. "расхождение" needs "расхожд").
static EXCEPTIONS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let entries: &[(&str, &[&str])] = &[
        ("расхождение", &["расхожд", "расхожден"]),
        ("расхождения", &["расхожд", "расхожден"]),
        ("повреждение", &["поврежден", "поврежд"]),
        ("повреждения", &["поврежден", "поврежд"]),
        ("зафиксировать", &["зафиксир", "фиксир"]),
        ("значительный", &["значительн", "значим"]),
        ("значительные", &["значительн", "значим"]),
        ("недовоз", &["недовоз", "недов"]),
        ("прием", &["прием", "приём", "принима"]),
        ("приём", &["прием", "приём", "принима"]),
        ("пустой", &["пуст", "пусто"]),
        ("пустая", &["пуст", "пусто"]),
        ("пустые", &["пуст", "пусто"]),
        ("упаковка", &["упаковк", "упаков"]),
        ("упаковки", &["упаковк", "упаков"]),
        ("упаковку", &["упаковк", "упаков"]),
        ("селлер", &["селлер", "селер"]),
        ("перевозка", &["перевоз", "перевозк"]),
        ("перевозки", &["перевоз", "перевозк"]),
        ("размещение", &["размещен", "размещ"]),
        ("проверка", &["провер", "проверк"]),
        ("целостности", &["целост", "целостн"]),
        ("товара", &["товар"]),
        ("товары", &["товар"]),
    ];
    entries.iter().copied().collect()
});

fn ends_with_any(word: &str, endings: &[&str]) -> bool {
    endings.iter().any(|ending| word.ends_with(ending))
}

/// Drop the last `n` chars of `word`.
fn strip_chars(word: &str, n: usize) -> String {
    let keep = word.chars().count().saturating_sub(n);
    word.chars().take(keep).collect()
}

/// Expand one whitespace-delimited query word into its candidate stems.
///
/// The result always contains the normalized word itself; suffix stripping
/// only applies to words longer than four chars, and only the first
/// matching rule branch fires. Words of three or four chars intentionally
/// skip stripping and rely on the exception dictionary and the ё/е
/// variants alone.
///
/// Stems shorter than [`MIN_STEM_CHARS`] are filtered out, except that a
/// word already shorter than three chars is returned as-is (there is
/// nothing safer to match on).
pub fn stems_for(word: &str) -> StemSet {
    let word = normalize(word.trim());
    let len = word.chars().count();

    let mut stems = StemSet::new();
    if len < 3 {
        stems.insert(word);
        return stems;
    }
    stems.insert(word.clone());

    // First match wins; the three branches are mutually exclusive.
    if len > 4 {
        if ends_with_any(&word, ADJECTIVE_ENDINGS) {
            stems.insert(strip_chars(&word, 2));
        } else if ends_with_any(&word, NOUN_ENDINGS) {
            stems.insert(strip_chars(&word, 2));
            if len > 5 {
                stems.insert(strip_chars(&word, 3));
            }
        } else if ends_with_any(&word, SINGLE_ENDINGS) {
            stems.insert(strip_chars(&word, 1));
        }
    }

    // Exceptions key off the original normalized word, not derived stems.
    if let Some(extra) = EXCEPTIONS.get(word.as_str()) {
        for stem in extra.iter() {
            stems.insert((*stem).to_string());
        }
    }

    // ё/е variants of the word as given. Redundant with normalization on
    // most call paths, kept because some callers pass raw tokens.
    if word.contains('е') {
        stems.insert(word.replace('е', "ё"));
    }
    if word.contains('ё') {
        stems.insert(word.replace('ё', "е"));
    }

    stems.retain(|stem| stem.chars().count() >= MIN_STEM_CHARS);
    stems
}

/// Union of [`stems_for`] over every whitespace-delimited word of `query`.
pub fn stem_query(query: &str) -> StemSet {
    let mut stems = StemSet::new();
    for word in query.split_whitespace() {
        stems.extend(stems_for(word));
    }
    stems
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_word_passes_through() {
        let stems = stems_for("из");
        assert_eq!(stems.len(), 1);
        assert!(stems.contains("из"));
    }

    #[test]
    fn test_three_and_four_char_words_skip_stripping() {
        // "вход" ends in a consonant, but even "окна" (ends 'а') must not
        // be stripped at four chars
        let stems = stems_for("окна");
        assert_eq!(stems.len(), 1);
        assert!(stems.contains("окна"));
    }

    #[test]
    fn test_adjective_ending_strips_two() {
        let stems = stems_for("складской");
        assert!(stems.contains("складской"));
        assert!(stems.contains("складск"));
    }

    #[test]
    fn test_adjective_branch_wins_over_noun_for_oi() {
        // "пустой" matches the adjective table; only a two-char strip, no
        // three-char noun strip
        let stems = stems_for("пустой");
        assert!(stems.contains("пуст"));
        assert!(!stems.contains("пус"));
    }

    #[test]
    fn test_noun_ending_strips_two_and_three() {
        // 8 chars > 5: both strips apply
        let stems = stems_for("товарами");
        assert!(stems.contains("товарам"));
        assert!(stems.contains("товара"));
        assert!(stems.contains("товар"));
    }

    #[test]
    fn test_noun_ending_five_chars_strips_two_only() {
        // "замок"? ends 'ок' (not in table). Use "валов": 5 chars, ends 'ов'
        let stems = stems_for("валов");
        assert!(stems.contains("вал"));
        // no 3-char strip at exactly five chars ("ва" would be dropped
        // anyway, but the rule must not fire)
        assert_eq!(stems.iter().filter(|s| s.starts_with("ва")).count(), 2);
    }

    #[test]
    fn test_single_ending_strips_one() {
        let stems = stems_for("выдача");
        assert!(stems.contains("выдача"));
        assert!(stems.contains("выдач"));
    }

    #[test]
    fn test_exception_dictionary_hit() {
        let stems = stems_for("товары");
        assert!(stems.contains("товар"));
    }

    #[test]
    fn test_exception_uses_original_word_not_derived_stem() {
        // "расхождение" the suffix rules produce "расхождени"; the useful
        // stems come from the dictionary
        let stems = stems_for("расхождение");
        assert!(stems.contains("расхожд"));
        assert!(stems.contains("расхожден"));
    }

    #[test]
    fn test_io_variant_added_both_ways() {
        assert!(stems_for("прием").contains("приём"));
        assert!(stems_for("приём").contains("прием"));
    }

    #[test]
    fn test_uppercase_input_is_normalized() {
        let stems = stems_for("Товары");
        assert!(stems.contains("товар"));
        assert!(stems.contains("товары"));
    }

    #[test]
    fn test_no_stem_shorter_than_three_chars() {
        for word in ["товары", "пустая", "упаковку", "ноя"] {
            for stem in stems_for(word) {
                assert!(stem.chars().count() >= 3, "{stem:?} from {word:?}");
            }
        }
    }

    #[test]
    fn test_stem_query_unions_tokens() {
        let stems = stem_query("пустая упаковка");
        assert!(stems.contains("пуст"));
        assert!(stems.contains("упаковк"));
        assert!(stems.contains("пустая"));
        assert!(stems.contains("упаковка"));
    }

    #[test]
    fn test_stem_query_empty() {
        assert!(stem_query("   ").is_empty());
    }

    proptest! {
        // Any word of 3+ chars keeps itself (normalized) in its stem set
        #[test]
        fn prop_word_is_its_own_stem(word in "[а-я]{3,12}") {
            let stems = stems_for(&word);
            prop_assert!(stems.contains(&normalize(&word)));
        }

        // The filter holds for arbitrary Cyrillic words
        #[test]
        fn prop_stems_are_at_least_three_chars(word in "[а-яё]{3,12}") {
            for stem in stems_for(&word) {
                prop_assert!(stem.chars().count() >= MIN_STEM_CHARS);
            }
        }
    }
}
