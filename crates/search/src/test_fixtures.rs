//! Shared fixtures for unit tests.

use chrono::{TimeZone, Utc};
use musika_core::{Listing, ListingStatus};
use musika_storage::{KeyValueStore, StorageError};

/// Store whose every operation fails, for degradation tests.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get_raw(&self, key: &str) -> musika_storage::Result<Option<serde_json::Value>> {
        Err(StorageError::InvalidKey(format!("simulated fault: {key}")))
    }

    fn set_raw(&self, key: &str, _value: serde_json::Value) -> musika_storage::Result<()> {
        Err(StorageError::InvalidKey(format!("simulated fault: {key}")))
    }
}

/// Listing with the given text fields and neutral defaults elsewhere.
pub fn listing(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    subcategory: &str,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        location: "Harare, Mashonaland".to_string(),
        price: 10.0,
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
        seller_verified: false,
        featured: false,
        status: ListingStatus::Active,
        seller_rating: 4.0,
    }
}

/// The tomato listing from the produce catalog fixtures.
pub fn tomatoes() -> Listing {
    let mut l = listing(
        "listing-tomatoes",
        "Fresh Tomatoes",
        "Ripe on the vine, picked this morning",
        "crops",
        "vegetables",
    );
    l.price = 2.0;
    l
}

/// The maize seed listing from the produce catalog fixtures.
pub fn maize_seed() -> Listing {
    let mut l = listing(
        "listing-maize",
        "Maize Seed",
        "Certified SC513 seed, 10kg bags",
        "crops",
        "seed",
    );
    l.price = 5.0;
    l.location = "Bulawayo, Matabeleland".to_string();
    l
}

/// A small mixed catalog: produce, livestock, and equipment.
pub fn catalog() -> Vec<Listing> {
    let mut road_runner = listing(
        "listing-chickens",
        "Road Runner Chickens",
        "Free range birds, ready for market",
        "livestock",
        "poultry",
    );
    road_runner.price = 8.0;
    road_runner.location = "Mutare, Manicaland".to_string();
    road_runner.seller_verified = true;
    road_runner.seller_rating = 4.8;
    road_runner.created_at = Utc.with_ymd_and_hms(2024, 6, 10, 9, 30, 0).unwrap();

    let mut plough = listing(
        "listing-plough",
        "Ox-Drawn Plough",
        "Single furrow, lightly used",
        "equipment",
        "tillage",
    );
    plough.price = 150.0;
    plough.location = "Gweru, Midlands".to_string();
    plough.featured = true;
    plough.created_at = Utc.with_ymd_and_hms(2024, 5, 20, 14, 0, 0).unwrap();

    let mut covo = listing(
        "listing-covo",
        "Covo Seedlings",
        "Tray of 50, hardened off",
        "crops",
        "vegetables",
    );
    covo.price = 3.0;
    covo.seller_verified = true;
    covo.created_at = Utc.with_ymd_and_hms(2024, 6, 15, 7, 0, 0).unwrap();

    vec![tomatoes(), maize_seed(), road_runner, plough, covo]
}
