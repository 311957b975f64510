//! Engine configuration schema definitions
//!
//! Tuning knobs shared by every component of the search engine.

use serde::{Deserialize, Serialize};

/// Root engine configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Fuzzy matcher tuning
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Result shaping defaults
    #[serde(default)]
    pub results: ResultsConfig,

    /// Search history retention
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Fuzzy matcher tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum normalized similarity a distance-based match must reach;
    /// anything below collapses to zero
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Lowercase both sides before matching
    #[serde(default = "default_true")]
    pub ignore_case: bool,

    /// Strip diacritics before matching
    #[serde(default = "default_true")]
    pub ignore_accents: bool,

    /// Advertised maximum edit distance; pairs whose length difference
    /// alone exceeds it are rejected without computing the distance
    #[serde(default = "default_max_distance")]
    pub max_distance: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            ignore_case: true,
            ignore_accents: true,
            max_distance: default_max_distance(),
        }
    }
}

fn default_threshold() -> f64 {
    0.4
}

fn default_true() -> bool {
    true
}

fn default_max_distance() -> usize {
    100
}

/// Result shaping defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsConfig {
    /// Page size when the caller passes none (or zero)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Cap on the number of suggestions returned
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

fn default_page_size() -> usize {
    12
}

fn default_max_suggestions() -> usize {
    8
}

/// Search history retention
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Entries kept, newest first
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Recent matching queries surfaced ahead of item suggestions
    #[serde(default = "default_recent_in_suggestions")]
    pub recent_in_suggestions: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            recent_in_suggestions: default_recent_in_suggestions(),
        }
    }
}

fn default_capacity() -> usize {
    50
}

fn default_recent_in_suggestions() -> usize {
    3
}
