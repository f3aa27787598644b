//! Result and scope types shared by the search components.

use catalog::{Player, VideoHighlight};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::scorer::Scored;

/// Which entity a search result points at.
///
/// `Match` is part of the result vocabulary but no source currently
/// produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Player,
    Highlight,
    Match,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultKind::Player => "player",
            ResultKind::Highlight => "highlight",
            ResultKind::Match => "match",
        };
        f.write_str(name)
    }
}

/// One row of the search panel. Produced fresh per query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordering signal only, in [0, 100]
    pub relevance_score: u8,
}

impl SearchResult {
    pub fn from_player(player: &Player) -> Self {
        Self {
            kind: ResultKind::Player,
            id: player.id.clone(),
            title: player.name.clone(),
            description: format!("{} • {}", player.position, player.team),
            relevance_score: player.relevance_score(),
        }
    }

    pub fn from_highlight(highlight: &VideoHighlight) -> Self {
        Self {
            kind: ResultKind::Highlight,
            id: highlight.id.clone(),
            title: highlight.title.clone(),
            description: highlight.description.clone(),
            relevance_score: highlight.relevance_score(),
        }
    }
}

/// Which collections a query runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Players,
    Highlights,
}

impl SearchScope {
    pub fn includes_players(&self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Players)
    }

    pub fn includes_highlights(&self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Highlights)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown search scope: {0} (expected all, players or highlights)")]
pub struct UnknownScope(pub String);

impl FromStr for SearchScope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(SearchScope::All),
            "players" => Ok(SearchScope::Players),
            "highlights" => Ok(SearchScope::Highlights),
            _ => Err(UnknownScope(s.to_string())),
        }
    }
}
