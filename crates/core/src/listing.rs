//! Marketplace listing records as the search engine consumes them.
//!
//! The catalog service owns these records: the engine treats them as
//! read-only input and never mutates them. Field names follow the catalog
//! API's camelCase JSON so catalog payloads deserialize directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a marketplace listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Visible and available to buyers
    #[default]
    Active,
    /// Awaiting moderation
    Pending,
    /// Sold out
    Sold,
    /// Hidden by the seller
    Inactive,
}

/// A marketplace listing supplied by the catalog collaborator.
///
/// `id` is unique within the collection passed to a single search call, and
/// `price` is non-negative by catalog invariant; the engine relies on both
/// but validates neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Catalog identifier, unique within one search call
    pub id: String,
    /// Listing headline
    pub title: String,
    /// Longer free-text description
    pub description: String,
    /// Top-level category, e.g. "crops"
    pub category: String,
    /// Second-level category, e.g. "vegetables"
    pub subcategory: String,
    /// Free text, by convention "City, Region"
    pub location: String,
    /// Asking price; the catalog guarantees `price >= 0`
    pub price: f64,
    /// Creation timestamp used by the "newest" sort
    pub created_at: DateTime<Utc>,
    /// Whether the seller passed identity verification
    pub seller_verified: bool,
    /// Whether the listing is currently promoted
    pub featured: bool,
    /// Lifecycle state
    #[serde(default)]
    pub status: ListingStatus,
    /// Aggregate seller rating used by the "rating" sort
    pub seller_rating: f64,
}

impl Listing {
    /// First comma-delimited segment of `location`, trimmed.
    ///
    /// Facets and suggestions group by city rather than the full location
    /// string.
    ///
    /// # Example
    /// ```
    /// # use musika_core::listing::{Listing, ListingStatus};
    /// # use chrono::Utc;
    /// let listing = Listing {
    ///     id: "1".into(),
    ///     title: "Fresh Tomatoes".into(),
    ///     description: String::new(),
    ///     category: "crops".into(),
    ///     subcategory: "vegetables".into(),
    ///     location: "Harare, Mashonaland".into(),
    ///     price: 2.0,
    ///     created_at: Utc::now(),
    ///     seller_verified: true,
    ///     featured: false,
    ///     status: ListingStatus::Active,
    ///     seller_rating: 4.5,
    /// };
    /// assert_eq!(listing.city(), "Harare");
    /// ```
    #[must_use]
    pub fn city(&self) -> &str {
        self.location.split(',').next().unwrap_or("").trim()
    }
}
