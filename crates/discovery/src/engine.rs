//! # Discovery Engine
//!
//! The only surface the UI calls. It coordinates:
//! 1. The grid: filter pipeline, then sort stage
//! 2. The search box: unified player/highlight search
//! 3. Card rendering: joining each highlight to its player
//!
//! Every operation is a pure function of its inputs. The engine keeps no
//! state between calls, so one instance can serve concurrent evaluations
//! over independent snapshots.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use tracing::debug;

use catalog::{Player, VideoHighlight};
use pipeline::{sort_in_place, FilterContext, FilterPipeline, FilterState, SortKey};
use search::{SearchEngine, SearchResult, SearchScope};

/// A highlight paired with the player it references, if that reference resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightCard<'a> {
    pub highlight: &'a VideoHighlight,
    pub player: Option<&'a Player>,
}

/// Facade over search, filtering and sorting
#[derive(Clone)]
pub struct DiscoveryEngine {
    search_engine: SearchEngine,
    filter_pipeline: Arc<FilterPipeline>,
}

impl DiscoveryEngine {
    /// Create an engine with the standard grid pipeline and default search.
    pub fn new() -> Self {
        Self {
            search_engine: SearchEngine::new(),
            filter_pipeline: Arc::new(FilterPipeline::standard()),
        }
    }

    /// Replace the search engine (e.g. to change the result limit)
    pub fn with_search_engine(mut self, search_engine: SearchEngine) -> Self {
        self.search_engine = search_engine;
        self
    }

    /// Replace the grid filter pipeline
    pub fn with_filter_pipeline(mut self, filter_pipeline: FilterPipeline) -> Self {
        self.filter_pipeline = Arc::new(filter_pipeline);
        self
    }

    /// Highlights shown in the grid, evaluated against today's local date.
    pub fn visible_highlights(
        &self,
        highlights: &[VideoHighlight],
        state: &FilterState,
        sort_key: SortKey,
    ) -> Vec<VideoHighlight> {
        self.visible_highlights_at(highlights, state, sort_key, Local::now().date_naive())
    }

    /// Highlights shown in the grid, with an explicit reference date.
    ///
    /// All four filter stages run before the sort. The input slice is not
    /// modified.
    pub fn visible_highlights_at(
        &self,
        highlights: &[VideoHighlight],
        state: &FilterState,
        sort_key: SortKey,
        today: NaiveDate,
    ) -> Vec<VideoHighlight> {
        let start_time = Instant::now();

        let context = FilterContext::new(state, today);
        let mut visible = self.filter_pipeline.apply(highlights.to_vec(), &context);
        sort_in_place(&mut visible, sort_key);

        debug!(
            "Grid evaluated: {} of {} highlights visible, sorted by {} in {:.2?}",
            visible.len(),
            highlights.len(),
            sort_key,
            start_time.elapsed()
        );
        visible
    }

    /// Search players and highlights.
    pub fn search(
        &self,
        query: &str,
        players: &[Player],
        highlights: &[VideoHighlight],
    ) -> Vec<SearchResult> {
        self.search_engine.search(query, players, highlights)
    }

    /// Search only the collections selected by `scope`.
    pub fn search_scoped(
        &self,
        query: &str,
        scope: SearchScope,
        players: &[Player],
        highlights: &[VideoHighlight],
    ) -> Vec<SearchResult> {
        self.search_engine
            .search_scoped(query, scope, players, highlights)
    }

    /// Join each highlight to its player, preserving highlight order.
    /// Dangling references yield a card with `player: None`.
    pub fn highlight_cards<'a>(
        &self,
        players: &'a [Player],
        highlights: &'a [VideoHighlight],
    ) -> Vec<HighlightCard<'a>> {
        let by_id: HashMap<&str, &Player> = players
            .iter()
            .map(|player| (player.id.as_str(), player))
            .collect();

        highlights
            .iter()
            .map(|highlight| HighlightCard {
                highlight,
                player: by_id.get(highlight.player_id.as_str()).copied(),
            })
            .collect()
    }
}

impl Default for DiscoveryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{AiInsights, HighlightType, PlayerStats, RecentPerformance, Timestamp};
    use pipeline::{DateRange, PlayerSelection};

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn build_players() -> Vec<Player> {
        vec![Player {
            id: "messi".to_string(),
            name: "Lionel Messi".to_string(),
            position: "Forward".to_string(),
            team: "Barcelona".to_string(),
            age: 36,
            nationality: "Argentina".to_string(),
            avatar: None,
            stats: PlayerStats::default(),
            recent_performance: RecentPerformance::default(),
        }]
    }

    fn clip(id: &str, player_id: &str, date: &str, confidence: u8) -> VideoHighlight {
        VideoHighlight {
            id: id.to_string(),
            player_id: player_id.to_string(),
            title: format!("Clip {}", id),
            description: String::new(),
            match_name: "Barcelona vs Sevilla".to_string(),
            date: date.to_string(),
            duration: "1:00".to_string(),
            tags: vec![],
            highlight_type: HighlightType::Strength,
            timestamp: Timestamp { start: 0, end: 60 },
            ai_insights: AiInsights {
                confidence,
                analysis: String::new(),
                key_moments: vec![],
            },
            video_url: String::new(),
            thumbnail: String::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
    }

    #[test]
    fn test_visible_highlights_filters_then_sorts() {
        let engine = DiscoveryEngine::new();
        let highlights = vec![
            clip("old", "messi", "2023-01-01", 99),
            clip("mid", "messi", "2024-03-10", 80),
            clip("new", "messi", "2024-03-15", 70),
        ];
        let state = FilterState {
            date_range: DateRange::Month,
            ..FilterState::default()
        };

        let visible = engine.visible_highlights_at(&highlights, &state, SortKey::Confidence, today());
        let ids: Vec<&str> = visible.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["mid", "new"]);
        // input untouched
        assert_eq!(highlights[0].id, "old");
    }

    #[test]
    fn test_repeated_evaluation_is_identical() {
        let engine = DiscoveryEngine::new();
        let highlights = vec![
            clip("1", "messi", "2024-03-10", 80),
            clip("2", "messi", "2024-03-10", 80),
        ];
        let state = FilterState {
            selected_player: PlayerSelection::from("messi"),
            ..FilterState::default()
        };

        let first = engine.visible_highlights_at(&highlights, &state, SortKey::Date, today());
        let second = engine.visible_highlights_at(&highlights, &state, SortKey::Date, today());
        assert_eq!(first, second);
    }

    #[test]
    fn test_highlight_cards_tolerate_dangling_reference() {
        let engine = DiscoveryEngine::new();
        let players = build_players();
        let highlights = vec![
            clip("1", "messi", "2024-03-10", 80),
            clip("2", "ghost", "2024-03-10", 80),
        ];

        let cards = engine.highlight_cards(&players, &highlights);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].player.map(|p| p.name.as_str()), Some("Lionel Messi"));
        assert!(cards[1].player.is_none());
    }

    #[test]
    fn test_search_delegates_with_limit() {
        let engine = DiscoveryEngine::new().with_search_engine(SearchEngine::new().with_limit(1));
        let players = build_players();
        let highlights = vec![clip("1", "messi", "2024-03-10", 99)];

        let results = engine.search("barcelona", &players, &highlights);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");

        let players_only =
            engine.search_scoped("barcelona", SearchScope::Players, &players, &highlights);
        assert_eq!(players_only[0].id, "messi");
    }
}
