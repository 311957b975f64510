//! Structured narrowing filters over the listing catalog.

use musika_core::{Listing, ListingStatus};
use serde::{Deserialize, Serialize};

/// Sort order for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Descending relevance score (the scorer's output order)
    #[default]
    Relevance,
    /// Ascending price
    PriceAsc,
    /// Descending price
    PriceDesc,
    /// Most recently created first
    Newest,
    /// Descending seller rating
    Rating,
    /// Reserved for geo ranking; keeps the incoming order
    Distance,
}

/// Immutable description of one search request.
///
/// Unset fields impose no constraint. Built with `Default` plus the
/// `with_*` methods:
///
/// ```
/// use musika_search::{SearchFilters, SortKey};
///
/// let filters = SearchFilters::default()
///     .with_query("tomato")
///     .with_category("crops")
///     .with_max_price(10.0)
///     .with_sort(SortKey::PriceAsc);
///
/// assert_eq!(filters.page, 1);
/// assert_eq!(filters.limit, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Free-text query; empty or unset skips scoring
    pub query: Option<String>,
    /// Category equality
    pub category: Option<String>,
    /// Subcategory equality
    pub subcategory: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Case-insensitive substring of the location field
    pub location: Option<String>,
    /// `Some(true)` keeps only verified sellers; `Some(false)` imposes nothing
    pub verified: Option<bool>,
    /// `Some(true)` keeps only featured listings; `Some(false)` imposes nothing
    pub featured: Option<bool>,
    /// Listing status equality
    pub status: Option<ListingStatus>,
    /// Result ordering; defaults to relevance
    pub sort_by: Option<SortKey>,
    /// 1-based page number; `0` is served as page 1
    pub page: usize,
    /// Page size; `0` falls back to the configured default
    pub limit: usize,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: None,
            category: None,
            subcategory: None,
            min_price: None,
            max_price: None,
            location: None,
            verified: None,
            featured: None,
            status: None,
            sort_by: None,
            page: 1,
            limit: 12,
        }
    }
}

impl SearchFilters {
    /// Set the free-text query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Require an exact category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Require an exact subcategory.
    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Set the inclusive lower price bound.
    #[must_use]
    pub fn with_min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    /// Set the inclusive upper price bound.
    #[must_use]
    pub fn with_max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Require the location to contain this substring, case-insensitively.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the verified-seller flag.
    #[must_use]
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    /// Set the featured flag.
    #[must_use]
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    /// Require an exact listing status.
    #[must_use]
    pub fn with_status(mut self, status: ListingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the sort order.
    #[must_use]
    pub fn with_sort(mut self, sort_by: SortKey) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Set the 1-based page number.
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Whether `listing` passes every set filter.
    ///
    /// Unset filters impose no constraint; checks short-circuit on the
    /// first failure.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(category) = &self.category {
            if listing.category != *category {
                return false;
            }
        }

        if let Some(subcategory) = &self.subcategory {
            if listing.subcategory != *subcategory {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if listing.price < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if listing.price > max {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !listing
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        if self.verified == Some(true) && !listing.seller_verified {
            return false;
        }

        if self.featured == Some(true) && !listing.featured {
            return false;
        }

        if let Some(status) = self.status {
            if listing.status != status {
                return false;
            }
        }

        true
    }
}

/// Keep the listings that pass every set filter, in catalog order.
#[must_use]
pub fn apply_filters(listings: &[Listing], filters: &SearchFilters) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| filters.matches(listing))
        .cloned()
        .collect()
}
