//! Search engine facade wiring every component together.

use std::sync::Arc;

use musika_core::config::EngineConfig;
use musika_core::Listing;
use musika_storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::facets::{compute_facets, SearchFacets};
use crate::filter::{apply_filters, SearchFilters};
use crate::history::{
    SavedSearch, SavedSearchStore, SavedSearchUpdate, SearchHistoryEntry, SearchHistoryStore,
};
use crate::paginate::{paginate, sort_listings};
use crate::relevance::rank_listings;
use crate::suggest::{merge_suggestions, suggestions};

/// The assembled output of one search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// The requested page of matches
    pub items: Vec<Listing>,
    /// Matches before pagination
    pub total: usize,
    /// 1-based page number served
    pub page: usize,
    /// Total pages at the effective limit
    pub total_pages: usize,
    /// Echo of the query, as passed
    pub query: Option<String>,
    /// Echo of the filters, as passed
    pub filters: SearchFilters,
    /// Suggestions drawn from the full catalog
    pub suggestions: Vec<String>,
    /// Facets over the filtered, pre-pagination set
    pub facets: SearchFacets,
}

/// Run the search pipeline over a catalog without touching history.
///
/// Stages: structured filters, then relevance ranking when a query is
/// present (zero scorers dropped), facets over that set, explicit sort,
/// pagination, and suggestions drawn from the full catalog. Degenerate
/// input such as an empty catalog or an out-of-range page produces a
/// valid empty result; there is no failure mode.
///
/// # Arguments
/// * `listings` - Catalog in a deterministic order
/// * `filters` - The search request
/// * `config` - Engine configuration
///
/// # Returns
/// The assembled [`SearchResults`]
#[must_use]
pub fn run_search(
    listings: &[Listing],
    filters: &SearchFilters,
    config: &EngineConfig,
) -> SearchResults {
    let query = filters.query.as_deref().unwrap_or("");

    let mut matches = apply_filters(listings, filters);
    if !query.is_empty() {
        matches = rank_listings(query, matches, &config.matcher);
    }

    // Facets reflect what the caller can actually page through
    let facets = compute_facets(&matches);

    sort_listings(&mut matches, filters.sort_by.unwrap_or_default());

    let limit = if filters.limit == 0 {
        config.results.page_size
    } else {
        filters.limit
    };
    let page = paginate(matches, filters.page, limit);

    let found = if query.is_empty() {
        Vec::new()
    } else {
        suggestions(query, listings, config.results.max_suggestions)
    };

    SearchResults {
        items: page.items,
        total: page.total,
        page: page.page,
        total_pages: page.total_pages,
        query: filters.query.clone(),
        filters: filters.clone(),
        suggestions: found,
        facets,
    }
}

/// Search engine with injected persistence.
///
/// Each instance owns its history and saved-search state; nothing is
/// shared between instances, so tests can construct as many as they need.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use musika_search::{SearchEngine, SearchFilters};
/// use musika_storage::MemoryStore;
///
/// let engine = SearchEngine::new(Arc::new(MemoryStore::new()));
/// let results = engine.search(&[], &SearchFilters::default().with_query("tomatoes"));
///
/// assert_eq!(results.total, 0);
/// assert_eq!(engine.history()[0].query, "tomatoes");
/// ```
pub struct SearchEngine {
    config: EngineConfig,
    history: SearchHistoryStore,
    saved: SavedSearchStore,
}

impl SearchEngine {
    /// Create an engine with default configuration.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(store: Arc<dyn KeyValueStore>, config: EngineConfig) -> Self {
        let history = SearchHistoryStore::new(Arc::clone(&store), config.history.capacity);
        let saved = SavedSearchStore::new(store);

        Self {
            config,
            history,
            saved,
        }
    }

    /// Configuration in effect.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a search and record non-empty queries in history.
    #[instrument(skip(self, listings, filters), fields(listing_count = listings.len()))]
    pub fn search(&self, listings: &[Listing], filters: &SearchFilters) -> SearchResults {
        let results = run_search(listings, filters, &self.config);

        if let Some(query) = filters.query.as_deref() {
            if !query.is_empty() {
                self.history.add(query, filters, results.total);
            }
        }

        debug!(
            total = results.total,
            page = results.page,
            "Search completed"
        );
        results
    }

    /// Combined suggestions: recent matching queries first, then
    /// listing-derived ones, deduplicated and capped.
    #[must_use]
    pub fn suggestions(&self, query: &str, listings: &[Listing]) -> Vec<String> {
        if query.chars().count() < 2 {
            return Vec::new();
        }

        let cap = self.config.results.max_suggestions;
        let recent = self
            .history
            .recent_matching(query, self.config.history.recent_in_suggestions);
        let from_listings = suggestions(query, listings, cap);

        merge_suggestions(recent, from_listings, cap)
    }

    /// History log, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<SearchHistoryEntry> {
        self.history.list()
    }

    /// Forget every recorded query.
    pub fn clear_history(&self) {
        self.history.clear();
    }

    /// Forget one recorded query by its exact text.
    pub fn remove_from_history(&self, query: &str) {
        self.history.remove(query);
    }

    /// Persist a named filter set.
    pub fn save_search(
        &self,
        name: &str,
        filters: &SearchFilters,
        notify_on_new: bool,
    ) -> SavedSearch {
        self.saved.save(name, filters, notify_on_new)
    }

    /// Every saved search, oldest first.
    #[must_use]
    pub fn saved_searches(&self) -> Vec<SavedSearch> {
        self.saved.list()
    }

    /// Delete a saved search; returns whether it existed.
    pub fn delete_saved_search(&self, id: Uuid) -> bool {
        self.saved.delete(id)
    }

    /// Merge a partial update into a saved search.
    ///
    /// Returns the updated entry, or `None` when the id is unknown.
    pub fn update_saved_search(&self, id: Uuid, update: SavedSearchUpdate) -> Option<SavedSearch> {
        self.saved.update(id, update)
    }
}
