//! Fuzzy search and ranking engine for Musika marketplace listings.
//!
//! This crate provides:
//! - Levenshtein-based fuzzy matching with tiered shortcuts
//! - Multi-field relevance scoring and ranking
//! - Structured narrowing filters
//! - Facet aggregation (categories, cities, price buckets)
//! - Stable sorting, pagination, and suggestions
//! - Persisted search history and saved searches
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use musika_search::{SearchEngine, SearchFilters, SortKey};
//! use musika_storage::MemoryStore;
//!
//! let engine = SearchEngine::new(Arc::new(MemoryStore::new()));
//!
//! let filters = SearchFilters::default()
//!     .with_category("crops")
//!     .with_sort(SortKey::PriceAsc);
//! let results = engine.search(&[], &filters);
//!
//! assert_eq!(results.total, 0);
//! assert_eq!(results.page, 1);
//! ```

mod engine;
mod facets;
mod filter;
mod fuzzy;
mod history;
mod paginate;
mod relevance;
mod suggest;
mod text;

#[cfg(test)]
pub(crate) mod test_fixtures;

#[cfg(feature = "wasm")]
mod wasm;

pub use engine::{run_search, SearchEngine, SearchResults};
pub use facets::{compute_facets, FacetCount, PriceRange, SearchFacets};
pub use filter::{apply_filters, SearchFilters, SortKey};
pub use fuzzy::{fuzzy_score, levenshtein};
pub use history::{
    SavedSearch, SavedSearchStore, SavedSearchUpdate, SearchHistoryEntry, SearchHistoryStore,
};
pub use paginate::{paginate, sort_listings, Page};
pub use relevance::{rank_listings, score_listing};
pub use suggest::{merge_suggestions, suggestions};
pub use text::{normalize, tokenize};
