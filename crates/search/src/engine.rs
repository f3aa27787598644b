//! Search Engine - unified free-text search over players and highlights
//!
//! ## Algorithm
//! 1. Keep players passing the matcher, score each with the player constant
//! 2. Keep highlights passing the matcher, score each by confidence
//! 3. Concatenate (players first)
//! 4. Stable sort by score DESC, so ties keep concatenation order
//! 5. Truncate to the result limit (5 by default)
//!
//! No matches is a normal outcome and yields an empty Vec.

use crate::matcher::Query;
use crate::types::{SearchResult, SearchScope};
use catalog::{Player, VideoHighlight};
use tracing::{debug, instrument};

/// Stateless search over borrowed collections.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    /// Maximum number of results returned per query
    limit: usize,
}

impl SearchEngine {
    pub const DEFAULT_LIMIT: usize = 5;

    /// Create a new search engine with the default limit
    pub fn new() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// Configure the maximum number of results (default: 5)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Search both collections.
    pub fn search(
        &self,
        query: &str,
        players: &[Player],
        highlights: &[VideoHighlight],
    ) -> Vec<SearchResult> {
        self.search_scoped(query, SearchScope::All, players, highlights)
    }

    /// Search the collections selected by `scope`.
    #[instrument(skip(self, players, highlights), fields(players = players.len(), highlights = highlights.len()))]
    pub fn search_scoped(
        &self,
        query: &str,
        scope: SearchScope,
        players: &[Player],
        highlights: &[VideoHighlight],
    ) -> Vec<SearchResult> {
        let Some(query) = Query::parse(query) else {
            return Vec::new();
        };

        let mut results: Vec<SearchResult> = Vec::new();

        if scope.includes_players() {
            results.extend(
                players
                    .iter()
                    .filter(|player| query.matches(*player))
                    .map(SearchResult::from_player),
            );
        }
        let player_hits = results.len();

        if scope.includes_highlights() {
            results.extend(
                highlights
                    .iter()
                    .filter(|highlight| query.matches(*highlight))
                    .map(SearchResult::from_highlight),
            );
        }

        debug!(
            "Matched {} players and {} highlights",
            player_hits,
            results.len() - player_hits
        );

        // sort_by is stable: equal scores keep players-then-highlights order
        results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        results.truncate(self.limit);
        results
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
