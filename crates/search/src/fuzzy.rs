//! Fuzzy matching built on Levenshtein edit distance.

use musika_core::config::MatcherConfig;

use crate::text::normalize;

/// Calculate Levenshtein edit distance between two strings.
///
/// Insertions, deletions, and substitutions each cost 1. Operates on
/// characters, not bytes.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
///
/// # Example
/// ```
/// use musika_search::levenshtein;
///
/// assert_eq!(levenshtein("tomato", "tomatoes"), 2);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Score how well `text` matches `query`, in `[0, 1]`.
///
/// Both sides are normalized first (see [`normalize`]). Tiers, in priority
/// order:
/// - `1.0` on exact equality
/// - `0.9` when `text` contains `query` as a substring
/// - `0.8` when any whitespace-delimited word of `text` starts with `query`
/// - otherwise `1 - distance / max_len`, kept only when it reaches
///   `config.threshold`, else `0.0`
///
/// Pairs whose length difference alone exceeds `config.max_distance` are
/// rejected without computing the distance.
///
/// # Arguments
/// * `query` - The search query
/// * `text` - The text to score against
/// * `config` - Matcher settings (normalization, threshold, distance cap)
///
/// # Returns
/// Match score in `[0, 1]`, higher is better
///
/// # Example
/// ```
/// use musika_core::config::MatcherConfig;
/// use musika_search::fuzzy_score;
///
/// let config = MatcherConfig::default();
/// assert_eq!(fuzzy_score("tomato", "Fresh Tomatoes", &config), 0.9);
/// assert_eq!(fuzzy_score("irrigation pump", "Maize Seed", &config), 0.0);
/// ```
#[must_use]
pub fn fuzzy_score(query: &str, text: &str, config: &MatcherConfig) -> f64 {
    let query = normalize(query, config);
    let text = normalize(text, config);

    if query == text {
        return 1.0;
    }

    if text.contains(&query) {
        return 0.9;
    }

    if text
        .split_whitespace()
        .any(|word| word.starts_with(&query))
    {
        return 0.8;
    }

    let query_len = query.chars().count();
    let text_len = text.chars().count();

    // A length gap is a lower bound on edit distance, so past the cap no
    // score could clear the threshold
    if query_len.abs_diff(text_len) > config.max_distance {
        return 0.0;
    }

    let max_len = query_len.max(text_len);
    let distance = levenshtein(&query, &text);
    let score = 1.0 - (distance as f64 / max_len as f64);

    if score >= config.threshold {
        score
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein("mbeu", "mbeu"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein("maize", "maise"), 1);
    }

    #[test]
    fn test_levenshtein_insert() {
        assert_eq!(levenshtein("tomato", "tomatos"), 1);
    }

    #[test]
    fn test_levenshtein_delete() {
        assert_eq!(levenshtein("tomato", "tomat"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein("", "maize"), 5);
        assert_eq!(levenshtein("maize", ""), 5);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn test_levenshtein_unicode() {
        // One accented char swap is a single edit, not a byte-level mess
        assert_eq!(levenshtein("tomaté", "tomate"), 1);
    }

    #[test]
    fn test_score_exact_ignores_case() {
        let config = MatcherConfig::default();
        assert_eq!(fuzzy_score("Tomatoes", "tomatoes", &config), 1.0);
    }

    #[test]
    fn test_score_substring() {
        let config = MatcherConfig::default();
        assert_eq!(fuzzy_score("tomato", "Fresh Tomatoes", &config), 0.9);
    }

    #[test]
    fn test_score_distance_ratio() {
        let config = MatcherConfig::default();
        // "tomatos" is not a substring of "tomatoes": distance 1, max len 8
        let score = fuzzy_score("tomatos", "tomatoes", &config);
        assert!((score - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_score_below_threshold_is_zero() {
        let config = MatcherConfig::default();
        assert_eq!(fuzzy_score("xyz-nonexistent", "Maize Seed", &config), 0.0);
    }

    #[test]
    fn test_score_case_sensitive_when_configured() {
        let config = MatcherConfig {
            ignore_case: false,
            ..MatcherConfig::default()
        };
        assert!(fuzzy_score("TOMATOES", "tomatoes", &config) < 1.0);
    }

    #[test]
    fn test_score_accent_insensitive() {
        let config = MatcherConfig::default();
        assert_eq!(fuzzy_score("tomate", "Tomaté", &config), 1.0);
    }

    #[test]
    fn test_score_rejects_past_length_cap() {
        // Length difference 4 exceeds the cap of 3, so the distance tier
        // never runs even though its ratio (0.6) would clear the threshold
        let capped = MatcherConfig {
            max_distance: 3,
            ..MatcherConfig::default()
        };
        assert_eq!(fuzzy_score("aaaaaa", "aaabaaabaa", &capped), 0.0);

        let default = MatcherConfig::default();
        let score = fuzzy_score("aaaaaa", "aaabaaabaa", &default);
        assert!((score - 0.6).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_score_is_bounded(query in "\\PC{0,24}", text in "\\PC{0,24}") {
            let config = MatcherConfig::default();
            let score = fuzzy_score(&query, &text, &config);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_identical_strings_score_one(s in "\\PC{1,24}") {
            let config = MatcherConfig::default();
            prop_assert_eq!(fuzzy_score(&s, &s, &config), 1.0);
        }

        #[test]
        fn prop_no_score_between_zero_and_threshold(
            query in "[a-z]{1,12}",
            text in "[a-z]{1,12}",
        ) {
            let config = MatcherConfig::default();
            let score = fuzzy_score(&query, &text, &config);
            // The distance tier either clears the threshold or collapses to 0;
            // 0.8 and 0.9 belong to the shortcut tiers
            prop_assert!(score == 0.0 || score >= config.threshold);
        }

        #[test]
        fn prop_levenshtein_symmetric(a in "[a-z]{0,16}", b in "[a-z]{0,16}") {
            prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        }
    }
}
