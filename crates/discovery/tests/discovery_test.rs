//! End-to-end tests for the discovery facade over the bundled seed data.

use std::path::Path;
use std::sync::Arc;

use catalog::{Catalog, HighlightType};
use chrono::NaiveDate;
use discovery::DiscoveryEngine;
use pipeline::{DateRange, FilterState, PlayerSelection, SortKey};
use search::{matches, ResultKind, PLAYER_RELEVANCE_SCORE};

fn load_seed() -> Catalog {
    Catalog::load_from_dir(Path::new("../../data")).expect("seed data should load")
}

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
}

fn ids<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    items.into_iter().collect()
}

#[test]
fn test_blank_query_returns_nothing() {
    let catalog = load_seed();
    let engine = DiscoveryEngine::new();

    for query in ["", "   ", "\t"] {
        assert!(engine
            .search(query, catalog.players(), catalog.highlights())
            .is_empty());
    }
}

#[test]
fn test_messi_query_returns_only_the_player_for_unrelated_highlight() {
    let catalog = load_seed();
    let engine = DiscoveryEngine::new();

    // highlight "1" never mentions the name in title, match or tags
    let mut unrelated = catalog.get_highlight("1").unwrap().clone();
    unrelated.description = "Beats multiple defenders in tight spaces.".to_string();

    let results = engine.search("messi", catalog.players(), &[unrelated]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].kind, ResultKind::Player);
    assert_eq!(results[0].id, "messi");
    assert_eq!(results[0].relevance_score, PLAYER_RELEVANCE_SCORE);
}

#[test]
fn test_search_results_are_capped_sorted_and_matching() {
    let catalog = load_seed();
    let engine = DiscoveryEngine::new();

    // every seed highlight is a Barcelona match, plus Messi himself
    let results = engine.search("barcelona", catalog.players(), catalog.highlights());
    assert_eq!(results.len(), 5);
    assert!(results
        .windows(2)
        .all(|pair| pair[0].relevance_score >= pair[1].relevance_score));

    let scores: Vec<u8> = results.iter().map(|r| r.relevance_score).collect();
    assert_eq!(scores, vec![98, 95, 95, 92, 89]);
    // player ties the 95 highlight and wins by concatenation order
    assert_eq!(results[1].kind, ResultKind::Player);
    assert_eq!(results[2].id, "2");

    for result in &results {
        match result.kind {
            ResultKind::Player => {
                assert!(matches(catalog.get_player(&result.id).unwrap(), "barcelona"))
            }
            _ => assert!(matches(
                catalog.get_highlight(&result.id).unwrap(),
                "barcelona"
            )),
        }
    }
}

#[test]
fn test_player_results_always_score_constant() {
    let catalog = load_seed();
    let engine = DiscoveryEngine::new();

    let results = engine.search("forward", catalog.players(), catalog.highlights());
    assert_eq!(results.len(), 4);
    assert!(results
        .iter()
        .all(|r| r.kind == ResultKind::Player && r.relevance_score == PLAYER_RELEVANCE_SCORE));
}

#[test]
fn test_grid_strengths_above_ninety_by_confidence() {
    let catalog = load_seed();
    let engine = DiscoveryEngine::new();
    let state = FilterState {
        selected_player: PlayerSelection::All,
        show_strengths: true,
        show_weaknesses: false,
        confidence_threshold: 90,
        date_range: DateRange::All,
        ..FilterState::default()
    };

    let visible = engine.visible_highlights_at(
        catalog.highlights(),
        &state,
        SortKey::Confidence,
        reference_date(),
    );

    assert_eq!(ids(visible.iter().map(|h| h.id.as_str())), vec!["1", "2", "4"]);
    assert!(visible
        .iter()
        .all(|h| h.highlight_type != HighlightType::Weakness));
}

#[test]
fn test_grid_week_range_sorted_by_duration() {
    let catalog = load_seed();
    let engine = DiscoveryEngine::new();
    let state = FilterState {
        date_range: DateRange::Week,
        ..FilterState::default()
    };

    // cutoff 2024-03-09 keeps the 15th and the 10th
    let visible = engine.visible_highlights_at(
        catalog.highlights(),
        &state,
        SortKey::Duration,
        reference_date(),
    );
    assert_eq!(ids(visible.iter().map(|h| h.id.as_str())), vec!["1", "2"]);
}

#[test]
fn test_confidence_and_relevance_grids_match() {
    let catalog = load_seed();
    let engine = DiscoveryEngine::new();
    let state = FilterState::default();

    let by_confidence = engine.visible_highlights_at(
        catalog.highlights(),
        &state,
        SortKey::Confidence,
        reference_date(),
    );
    let by_relevance = engine.visible_highlights_at(
        catalog.highlights(),
        &state,
        SortKey::Relevance,
        reference_date(),
    );
    assert_eq!(by_confidence, by_relevance);
}

#[test]
fn test_unknown_player_selection_yields_empty_grid() {
    let catalog = load_seed();
    let engine = DiscoveryEngine::new();
    let state = FilterState {
        selected_player: PlayerSelection::from("haaland"),
        ..FilterState::default()
    };

    let visible =
        engine.visible_highlights_at(catalog.highlights(), &state, SortKey::Date, reference_date());
    assert!(visible.is_empty());
}

#[test]
fn test_cards_join_highlights_to_players() {
    let catalog = load_seed();
    let engine = DiscoveryEngine::new();

    let cards = engine.highlight_cards(catalog.players(), catalog.highlights());
    assert_eq!(cards.len(), catalog.highlights().len());
    assert!(cards
        .iter()
        .all(|card| card.player.map(|p| p.id.as_str()) == Some("messi")));
}

#[test]
fn test_empty_collections_are_normal_input() {
    let engine = DiscoveryEngine::new();

    assert!(engine.search("messi", &[], &[]).is_empty());
    assert!(engine
        .visible_highlights(&[], &FilterState::default(), SortKey::Date)
        .is_empty());
    assert!(engine.highlight_cards(&[], &[]).is_empty());
}

#[tokio::test]
async fn test_concurrent_evaluations_agree() {
    let catalog = Arc::new(load_seed());
    let engine = DiscoveryEngine::new();
    let state = FilterState {
        show_weaknesses: false,
        ..FilterState::default()
    };
    let expected =
        engine.visible_highlights_at(catalog.highlights(), &state, SortKey::Date, reference_date());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let catalog = Arc::clone(&catalog);
        let engine = engine.clone();
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            engine.visible_highlights_at(
                catalog.highlights(),
                &state,
                SortKey::Date,
                reference_date(),
            )
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}
