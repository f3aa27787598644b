//! Benchmarks for free-text search
//!
//! Run with: cargo bench --package search
//!
//! Uses the bundled seed catalog replicated to a dashboard-sized collection.

use catalog::{Catalog, Player, VideoHighlight};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use search::SearchEngine;
use std::path::Path;

fn load_test_data() -> (Vec<Player>, Vec<VideoHighlight>) {
    let data_dir = Path::new("../../data");
    let catalog = Catalog::load_from_dir(data_dir).expect("Failed to load test data");

    // Replicate the seed records so the scan has something to chew on
    let mut players = Vec::new();
    let mut highlights = Vec::new();
    for copy in 0..250 {
        for player in catalog.players() {
            let mut player = player.clone();
            player.id = format!("{}-{}", player.id, copy);
            players.push(player);
        }
        for highlight in catalog.highlights() {
            let mut highlight = highlight.clone();
            highlight.id = format!("{}-{}", highlight.id, copy);
            highlights.push(highlight);
        }
    }
    (players, highlights)
}

fn bench_search_hit(c: &mut Criterion) {
    let (players, highlights) = load_test_data();
    let engine = SearchEngine::new();

    c.bench_function("search_common_term", |b| {
        b.iter(|| {
            let results = engine.search(black_box("barcelona"), &players, &highlights);
            black_box(results)
        })
    });
}

fn bench_search_miss(c: &mut Criterion) {
    let (players, highlights) = load_test_data();
    let engine = SearchEngine::new();

    c.bench_function("search_no_match", |b| {
        b.iter(|| {
            let results = engine.search(black_box("zzzz"), &players, &highlights);
            black_box(results)
        })
    });
}

criterion_group!(benches, bench_search_hit, bench_search_miss);
criterion_main!(benches);
