//! Multi-field relevance scoring for listings.

use musika_core::config::MatcherConfig;
use musika_core::Listing;

use crate::fuzzy::fuzzy_score;

const TITLE_WEIGHT: f64 = 2.0;
const DESCRIPTION_WEIGHT: f64 = 1.0;
const CATEGORY_WEIGHT: f64 = 1.5;
const SUBCATEGORY_WEIGHT: f64 = 1.5;
const LOCATION_WEIGHT: f64 = 1.0;

/// Score a listing against a query.
///
/// Weighted sum of per-field fuzzy scores: title counts double, category
/// and subcategory one and a half, description and location once. A total
/// of `0.0` means nothing about the listing matches.
///
/// # Arguments
/// * `query` - The search query (non-empty)
/// * `listing` - The listing to score
/// * `config` - Matcher settings
///
/// # Returns
/// Relevance score, higher is better
#[must_use]
pub fn score_listing(query: &str, listing: &Listing, config: &MatcherConfig) -> f64 {
    fuzzy_score(query, &listing.title, config) * TITLE_WEIGHT
        + fuzzy_score(query, &listing.description, config) * DESCRIPTION_WEIGHT
        + fuzzy_score(query, &listing.category, config) * CATEGORY_WEIGHT
        + fuzzy_score(query, &listing.subcategory, config) * SUBCATEGORY_WEIGHT
        + fuzzy_score(query, &listing.location, config) * LOCATION_WEIGHT
}

/// Score every listing, drop zero scorers, and order by descending score.
///
/// The sort is stable, so listings with equal scores keep their incoming
/// order.
#[must_use]
pub fn rank_listings(
    query: &str,
    listings: Vec<Listing>,
    config: &MatcherConfig,
) -> Vec<Listing> {
    let mut scored = score_all(query, listings, config);

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(_, listing)| listing).collect()
}

#[cfg(feature = "parallel")]
fn score_all(
    query: &str,
    listings: Vec<Listing>,
    config: &MatcherConfig,
) -> Vec<(f64, Listing)> {
    use rayon::prelude::*;

    listings
        .into_par_iter()
        .map(|listing| (score_listing(query, &listing, config), listing))
        .filter(|(score, _)| *score > 0.0)
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all(
    query: &str,
    listings: Vec<Listing>,
    config: &MatcherConfig,
) -> Vec<(f64, Listing)> {
    listings
        .into_iter()
        .map(|listing| (score_listing(query, &listing, config), listing))
        .filter(|(score, _)| *score > 0.0)
        .collect()
}
