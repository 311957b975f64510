//! Search suggestions drawn from listing fields and recent queries.

use musika_core::Listing;

/// Collect up to `cap` distinct suggestions for a partial query.
///
/// Scans listings in catalog order and gathers case-insensitive substring
/// matches from, per listing: title, category, subcategory, then city.
/// The first occurrence of a string wins; later duplicates are dropped.
/// Queries shorter than two characters yield nothing.
///
/// # Arguments
/// * `query` - Partial query as typed, unnormalized
/// * `listings` - Catalog to draw suggestions from
/// * `cap` - Maximum number of suggestions
///
/// # Returns
/// Distinct suggestion strings in first-match order
#[must_use]
pub fn suggestions(query: &str, listings: &[Listing], cap: usize) -> Vec<String> {
    if query.chars().count() < 2 {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut out: Vec<String> = Vec::new();

    for listing in listings {
        for candidate in [
            listing.title.as_str(),
            listing.category.as_str(),
            listing.subcategory.as_str(),
            listing.city(),
        ] {
            if out.len() >= cap {
                return out;
            }
            if candidate.to_lowercase().contains(&needle)
                && !out.iter().any(|s| s == candidate)
            {
                out.push(candidate.to_string());
            }
        }
    }

    out
}

/// Merge recent-query suggestions ahead of listing-derived ones.
///
/// First occurrence wins across the combined list, capped at `cap`.
#[must_use]
pub fn merge_suggestions(
    recent: Vec<String>,
    from_listings: Vec<String>,
    cap: usize,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for suggestion in recent.into_iter().chain(from_listings) {
        if out.len() >= cap {
            break;
        }
        if !out.iter().any(|s| s == &suggestion) {
            out.push(suggestion);
        }
    }

    out
}
