//! Search history and saved searches, persisted through a key-value store.
//!
//! Both stores load once at construction and rewrite their full list on
//! every mutation. A storage fault is logged and drops the affected store
//! to memory-only for the rest of the process; it never surfaces to the
//! search path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use musika_storage::{KeyValueStore, StoreExt};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::filter::SearchFilters;

const HISTORY_KEY: &str = "search_history";
const SAVED_SEARCHES_KEY: &str = "saved_searches";

/// One remembered query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    /// The query as typed
    pub query: String,
    /// Filters in effect when the query ran
    pub filters: SearchFilters,
    /// When the query ran
    pub timestamp: DateTime<Utc>,
    /// Matches the query produced
    pub result_count: usize,
}

/// A user-named, persisted filter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    /// Stable identifier
    pub id: Uuid,
    /// User-chosen name
    pub name: String,
    /// The saved filter set
    pub filters: SearchFilters,
    /// When the search was saved
    pub created_at: DateTime<Utc>,
    /// Whether new matching listings should notify the user
    #[serde(default)]
    pub notify_on_new: bool,
}

/// Partial update for a saved search; unset fields keep their prior values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedSearchUpdate {
    /// Replacement name
    pub name: Option<String>,
    /// Replacement filter set
    pub filters: Option<SearchFilters>,
    /// Replacement notification flag
    pub notify_on_new: Option<bool>,
}

/// Deduplicated log of past queries, newest first, capped in length.
pub struct SearchHistoryStore {
    store: Arc<dyn KeyValueStore>,
    entries: RwLock<Vec<SearchHistoryEntry>>,
    capacity: usize,
    degraded: AtomicBool,
}

impl SearchHistoryStore {
    /// Load the history log from `store`.
    ///
    /// A load fault starts the log empty; the next successful persist
    /// overwrites whatever was stored.
    pub fn new(store: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        let entries = match store.get::<Vec<SearchHistoryEntry>>(HISTORY_KEY) {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load search history, starting empty");
                Vec::new()
            }
        };

        Self {
            store,
            entries: RwLock::new(entries),
            capacity,
            degraded: AtomicBool::new(false),
        }
    }

    /// Record a query at the front of the log.
    ///
    /// An existing entry with the same literal query string is removed
    /// first, then the log is truncated to capacity and persisted.
    pub fn add(&self, query: &str, filters: &SearchFilters, result_count: usize) {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };

        entries.retain(|entry| entry.query != query);
        entries.insert(
            0,
            SearchHistoryEntry {
                query: query.to_string(),
                filters: filters.clone(),
                timestamp: Utc::now(),
                result_count,
            },
        );
        entries.truncate(self.capacity);

        self.persist(&entries);
    }

    /// Snapshot of the log, newest first.
    #[must_use]
    pub fn list(&self) -> Vec<SearchHistoryEntry> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Empty the log.
    pub fn clear(&self) {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };
        entries.clear();
        self.persist(&entries);
    }

    /// Remove the entry recorded for exactly `query`, if any.
    pub fn remove(&self, query: &str) {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };
        entries.retain(|entry| entry.query != query);
        self.persist(&entries);
    }

    /// Most recent `limit` queries containing `input`, case-insensitively.
    #[must_use]
    pub fn recent_matching(&self, input: &str, limit: usize) -> Vec<String> {
        let needle = input.to_lowercase();
        self.entries
            .read()
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| entry.query.to_lowercase().contains(&needle))
                    .take(limit)
                    .map(|entry| entry.query.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn persist(&self, entries: &[SearchHistoryEntry]) {
        if self.degraded.load(Ordering::Relaxed) {
            return;
        }
        if let Err(e) = self.store.set(HISTORY_KEY, entries) {
            warn!(error = %e, "Failed to persist search history, continuing in memory");
            self.degraded.store(true, Ordering::Relaxed);
        }
    }
}

/// Unbounded collection of saved searches, persisted in full on mutation.
pub struct SavedSearchStore {
    store: Arc<dyn KeyValueStore>,
    entries: RwLock<Vec<SavedSearch>>,
    degraded: AtomicBool,
}

impl SavedSearchStore {
    /// Load the saved searches from `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = match store.get::<Vec<SavedSearch>>(SAVED_SEARCHES_KEY) {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load saved searches, starting empty");
                Vec::new()
            }
        };

        Self {
            store,
            entries: RwLock::new(entries),
            degraded: AtomicBool::new(false),
        }
    }

    /// Append a new saved search with a fresh identifier.
    pub fn save(&self, name: &str, filters: &SearchFilters, notify_on_new: bool) -> SavedSearch {
        let saved = SavedSearch {
            id: Uuid::new_v4(),
            name: name.to_string(),
            filters: filters.clone(),
            created_at: Utc::now(),
            notify_on_new,
        };

        if let Ok(mut entries) = self.entries.write() {
            entries.push(saved.clone());
            self.persist(&entries);
        }

        saved
    }

    /// Snapshot of all saved searches, oldest first.
    #[must_use]
    pub fn list(&self) -> Vec<SavedSearch> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Delete by id; returns whether an entry existed.
    pub fn delete(&self, id: Uuid) -> bool {
        let Ok(mut entries) = self.entries.write() else {
            return false;
        };

        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        let removed = entries.len() < before;

        if removed {
            self.persist(&entries);
        }
        removed
    }

    /// Merge `update` into the entry with `id`.
    ///
    /// Returns the updated entry, or `None` when the id is unknown.
    pub fn update(&self, id: Uuid, update: SavedSearchUpdate) -> Option<SavedSearch> {
        let Ok(mut entries) = self.entries.write() else {
            return None;
        };

        let entry = entries.iter_mut().find(|entry| entry.id == id)?;

        if let Some(name) = update.name {
            entry.name = name;
        }
        if let Some(filters) = update.filters {
            entry.filters = filters;
        }
        if let Some(notify_on_new) = update.notify_on_new {
            entry.notify_on_new = notify_on_new;
        }

        let updated = entry.clone();
        self.persist(&entries);
        Some(updated)
    }

    fn persist(&self, entries: &[SavedSearch]) {
        if self.degraded.load(Ordering::Relaxed) {
            return;
        }
        if let Err(e) = self.store.set(SAVED_SEARCHES_KEY, entries) {
            warn!(error = %e, "Failed to persist saved searches, continuing in memory");
            self.degraded.store(true, Ordering::Relaxed);
        }
    }
}
