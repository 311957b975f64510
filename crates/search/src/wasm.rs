//! WASM bindings for the search pipeline.

use wasm_bindgen::prelude::*;

use musika_core::config::{EngineConfig, MatcherConfig};
use musika_core::Listing;

use crate::engine::run_search;
use crate::filter::SearchFilters;

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::fuzzy::levenshtein(a, b)
}

/// Fuzzy match score in [0, 1] with default matcher settings.
#[wasm_bindgen]
pub fn match_score(query: &str, text: &str) -> f64 {
    crate::fuzzy::fuzzy_score(query, text, &MatcherConfig::default())
}

/// Normalized form of `text` under default matcher settings.
#[wasm_bindgen]
pub fn normalize_text(text: &str) -> String {
    crate::text::normalize(text, &MatcherConfig::default())
}

/// Lowercase word tokens of `text`.
#[wasm_bindgen]
pub fn tokenize_text(text: &str) -> Vec<String> {
    crate::text::tokenize(text)
}

/// Run a full search over JSON-encoded listings.
///
/// # Arguments
/// * `filters_json` - JSON object matching `SearchFilters`
/// * `listings_json` - JSON array of listings
///
/// # Returns
/// Serialized search results; malformed input yields an empty object
/// rather than throwing
#[wasm_bindgen]
pub fn search_listings(filters_json: &str, listings_json: &str) -> String {
    let filters: SearchFilters = match serde_json::from_str(filters_json) {
        Ok(filters) => filters,
        Err(_) => return "{}".to_string(),
    };
    let listings: Vec<Listing> = match serde_json::from_str(listings_json) {
        Ok(listings) => listings,
        Err(_) => return "{}".to_string(),
    };

    let results = run_search(&listings, &filters, &EngineConfig::default());
    serde_json::to_string(&results).unwrap_or_else(|_| "{}".to_string())
}
