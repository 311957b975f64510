//! Benchmarks for the search pipeline.

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use musika_core::config::{EngineConfig, MatcherConfig};
use musika_core::{Listing, ListingStatus};
use musika_search::{fuzzy_score, levenshtein, run_search, suggestions, SearchFilters};

const TITLES: &[&str] = &[
    "Fresh Tomatoes",
    "Maize Seed",
    "Road Runner Chickens",
    "Ox-Drawn Plough",
    "Covo Seedlings",
    "Groundnut Shells",
    "Broiler Feed",
    "Irrigation Pipes",
];
const CATEGORIES: &[&str] = &["crops", "livestock", "equipment", "inputs"];
const CITIES: &[&str] = &["Harare", "Bulawayo", "Mutare", "Gweru", "Masvingo"];

fn create_catalog(count: usize) -> Vec<Listing> {
    (0..count)
        .map(|i| Listing {
            id: format!("listing-{i}"),
            title: format!("{} lot {}", TITLES[i % TITLES.len()], i),
            description: "Farm gate prices, collection preferred".to_string(),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            subcategory: "general".to_string(),
            location: format!("{}, Province", CITIES[i % CITIES.len()]),
            price: (i % 200) as f64 + 1.0,
            created_at: Utc::now(),
            seller_verified: i % 3 == 0,
            featured: i % 7 == 0,
            status: ListingStatus::Active,
            seller_rating: 3.0 + (i % 20) as f64 / 10.0,
        })
        .collect()
}

fn bench_fuzzy(c: &mut Criterion) {
    let config = MatcherConfig::default();

    c.bench_function("levenshtein_short", |b| {
        b.iter(|| levenshtein(black_box("tomatoes"), black_box("tomatos")))
    });

    c.bench_function("fuzzy_score_miss", |b| {
        b.iter(|| {
            fuzzy_score(
                black_box("irrigation"),
                black_box("Road Runner Chickens"),
                &config,
            )
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_search");
    let config = EngineConfig::default();

    for size in [100, 1000, 5000].iter() {
        let catalog = create_catalog(*size);

        let with_query = SearchFilters::default().with_query("tomato");
        group.bench_with_input(BenchmarkId::new("query", size), size, |b, _| {
            b.iter(|| run_search(black_box(&catalog), black_box(&with_query), &config))
        });

        let filters_only = SearchFilters::default()
            .with_category("crops")
            .with_max_price(50.0);
        group.bench_with_input(BenchmarkId::new("filters_only", size), size, |b, _| {
            b.iter(|| run_search(black_box(&catalog), black_box(&filters_only), &config))
        });
    }

    group.finish();
}

fn bench_suggestions(c: &mut Criterion) {
    let catalog = create_catalog(1000);

    c.bench_function("suggestions_1000", |b| {
        b.iter(|| suggestions(black_box("fresh"), black_box(&catalog), 8))
    });
}

criterion_group!(benches, bench_fuzzy, bench_search, bench_suggestions);
criterion_main!(benches);
