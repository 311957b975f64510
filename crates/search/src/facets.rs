//! Facet aggregation over filtered result sets.

use std::collections::HashMap;

use musika_core::Listing;
use serde::{Deserialize, Serialize};

/// One field value and how many filtered listings carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    /// The field value
    pub name: String,
    /// Occurrences in the filtered set
    pub count: usize,
}

/// One price bucket with inclusive integer bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Listings priced inside the bounds
    pub count: usize,
}

/// Aggregated facets for one result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFacets {
    /// Category counts, descending
    pub categories: Vec<FacetCount>,
    /// City counts, descending
    pub locations: Vec<FacetCount>,
    /// Four contiguous buckets spanning the observed price range
    pub price_ranges: Vec<PriceRange>,
}

/// Aggregate facets from a filtered, pre-pagination result set.
///
/// Category and city counts are sorted by descending count; equal counts
/// keep first-seen catalog order. Price buckets divide the observed
/// min..max span into four equal widths with floor/ceil bounds. Because the
/// bounds round outward, adjacent buckets can overlap on fractional steps
/// and a listing priced on a shared boundary is counted in both.
#[must_use]
pub fn compute_facets(listings: &[Listing]) -> SearchFacets {
    SearchFacets {
        categories: tally(listings.iter().map(|l| l.category.clone())),
        locations: tally(listings.iter().map(|l| l.city().to_string())),
        price_ranges: price_ranges(listings),
    }
}

fn tally(values: impl Iterator<Item = String>) -> Vec<FacetCount> {
    let mut counts: Vec<FacetCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for name in values {
        if name.is_empty() {
            continue;
        }
        match index.get(&name) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(name.clone(), counts.len());
                counts.push(FacetCount { name, count: 1 });
            }
        }
    }

    // Stable sort keeps first-seen order between equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

fn price_ranges(listings: &[Listing]) -> Vec<PriceRange> {
    if listings.is_empty() {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for listing in listings {
        min = min.min(listing.price);
        max = max.max(listing.price);
    }

    let step = (max - min) / 4.0;
    (0..4)
        .map(|i| {
            let lo = (min + step * f64::from(i)).floor();
            let hi = (min + step * f64::from(i + 1)).ceil();
            let count = listings
                .iter()
                .filter(|l| l.price >= lo && l.price <= hi)
                .count();
            PriceRange {
                min: lo,
                max: hi,
                count,
            }
        })
        .collect()
}
