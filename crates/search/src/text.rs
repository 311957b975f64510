//! Text normalization and tokenization.

use musika_core::config::MatcherConfig;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Normalize text for matching.
///
/// Lower-cases when `config.ignore_case` is set and strips diacritics when
/// `config.ignore_accents` is set (canonical decomposition, then dropping
/// combining marks).
///
/// # Arguments
/// * `text` - Text to normalize
/// * `config` - Matcher settings controlling case and accent handling
///
/// # Returns
/// The normalized string
///
/// # Example
/// ```
/// use musika_core::config::MatcherConfig;
/// use musika_search::normalize;
///
/// let config = MatcherConfig::default();
/// assert_eq!(normalize("Tomaté", &config), "tomate");
/// ```
#[must_use]
pub fn normalize(text: &str, config: &MatcherConfig) -> String {
    let lowered = if config.ignore_case {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    if config.ignore_accents {
        lowered.nfd().filter(|c| !is_combining_mark(*c)).collect()
    } else {
        lowered
    }
}

/// Split text into lowercase word tokens.
///
/// Unicode word segmentation drops punctuation; tokens of a single
/// character are discarded.
///
/// # Example
/// ```
/// use musika_search::tokenize;
///
/// let tokens = tokenize("Fresh Tomatoes, 25kg!");
/// assert_eq!(tokens, vec!["fresh", "tomatoes", "25kg"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .filter(|word| word.chars().count() > 1)
        .map(ToString::to_string)
        .collect()
}
