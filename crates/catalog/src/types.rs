//! Core domain types for the highlight catalog.
//!
//! This module defines the records the discovery engine works on:
//! - Type aliases for domain clarity (PlayerId, HighlightId)
//! - Player with fixed-field stats and recent performance
//! - VideoHighlight with its polarity, clip window and AI annotation
//! - Catalog, the in-memory store that owns both collections

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable string key of a player (e.g. "messi")
pub type PlayerId = String;

/// Unique identifier of a highlight within its collection
pub type HighlightId = String;

// =============================================================================
// Player-related Types
// =============================================================================

/// A scouted player.
///
/// Read-only to the engine: records are created by the data source and
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub team: String,
    pub age: u32,
    pub nationality: String,
    /// Media reference for the profile picture, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub stats: PlayerStats,
    #[serde(alias = "recentPerformance")]
    pub recent_performance: RecentPerformance,
}

/// Attribute ratings, each in [0, 100].
///
/// The attribute set is closed, so this is a plain struct rather than a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub dribbling: u8,
    pub finishing: u8,
    pub passing: u8,
    pub defense: u8,
    pub speed: u8,
    pub strength: u8,
}

impl PlayerStats {
    /// Upper bound of every attribute
    pub const MAX: u8 = 100;

    /// Named attributes in display order
    pub fn attributes(&self) -> [(&'static str, u8); 6] {
        [
            ("dribbling", self.dribbling),
            ("finishing", self.finishing),
            ("passing", self.passing),
            ("defense", self.defense),
            ("speed", self.speed),
            ("strength", self.strength),
        ]
    }
}

/// Recent match output of a player
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecentPerformance {
    pub goals: u32,
    pub assists: u32,
    #[serde(alias = "averageRating")]
    pub average_rating: f32,
    #[serde(alias = "minutesPlayed")]
    pub minutes_played: u32,
}

// =============================================================================
// Highlight-related Types
// =============================================================================

/// Polarity of a highlight. Exactly one per highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightType {
    Strength,
    Weakness,
    Neutral,
}

impl HighlightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightType::Strength => "strength",
            HighlightType::Weakness => "weakness",
            HighlightType::Neutral => "neutral",
        }
    }
}

impl fmt::Display for HighlightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clip window inside the source video, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub start: u32,
    pub end: u32,
}

impl Timestamp {
    /// `start < end`
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Clip length in seconds (0 for an invalid window)
    pub fn span(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// AI annotation attached to a highlight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiInsights {
    /// Model confidence in [0, 100]
    pub confidence: u8,
    pub analysis: String,
    #[serde(default, alias = "keyMoments")]
    pub key_moments: Vec<String>,
}

/// A tagged, timestamped clip evidencing one player action.
///
/// `player_id` is a reference, not ownership: it may fail to resolve, and
/// nothing in the engine treats that as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoHighlight {
    pub id: HighlightId,
    #[serde(alias = "playerId")]
    pub player_id: PlayerId,
    pub title: String,
    pub description: String,
    #[serde(rename = "match")]
    pub match_name: String,
    /// ISO date as received; see [`VideoHighlight::calendar_date`]
    pub date: String,
    /// Display length, `m:ss`
    pub duration: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub highlight_type: HighlightType,
    pub timestamp: Timestamp,
    #[serde(alias = "aiInsights")]
    pub ai_insights: AiInsights,
    /// Media reference handed to the player collaborator
    #[serde(default, alias = "videoUrl")]
    pub video_url: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl VideoHighlight {
    pub fn confidence(&self) -> u8 {
        self.ai_insights.confidence
    }

    /// Calendar date of the clip, or `None` when `date` is not parseable.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }
}

/// Parse an ISO date or date-time into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` (also with a space
/// separator) and RFC 3339. Anything else yields `None`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.date_naive())
}

// =============================================================================
// Catalog - The In-Memory Store
// =============================================================================

/// Holds every player and highlight in insertion order.
///
/// Order matters here: search ties and filter output both preserve
/// collection order, so the primary stores are vectors and the maps only
/// index into them.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) players: Vec<Player>,
    pub(crate) highlights: Vec<VideoHighlight>,

    // Position indices into the vectors above
    pub(crate) player_positions: HashMap<PlayerId, usize>,
    pub(crate) highlight_positions: HashMap<HighlightId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a player by id
    pub fn get_player(&self, id: &str) -> Option<&Player> {
        self.player_positions.get(id).map(|&pos| &self.players[pos])
    }

    /// Get a highlight by id
    pub fn get_highlight(&self, id: &str) -> Option<&VideoHighlight> {
        self.highlight_positions
            .get(id)
            .map(|&pos| &self.highlights[pos])
    }

    /// All players, in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// All highlights, in insertion order
    pub fn highlights(&self) -> &[VideoHighlight] {
        &self.highlights
    }

    /// Highlights referencing `player_id`, in collection order
    pub fn highlights_for_player(&self, player_id: &str) -> Vec<&VideoHighlight> {
        self.highlights
            .iter()
            .filter(|highlight| highlight.player_id == player_id)
            .collect()
    }

    /// Insert a player. An existing record with the same id is replaced in place,
    /// so ids stay unique and positions stay stable.
    pub fn insert_player(&mut self, player: Player) {
        match self.player_positions.get(&player.id) {
            Some(&pos) => self.players[pos] = player,
            None => {
                self.player_positions
                    .insert(player.id.clone(), self.players.len());
                self.players.push(player);
            }
        }
    }

    /// Insert a highlight, replacing any existing record with the same id.
    pub fn insert_highlight(&mut self, highlight: VideoHighlight) {
        match self.highlight_positions.get(&highlight.id) {
            Some(&pos) => self.highlights[pos] = highlight,
            None => {
                self.highlight_positions
                    .insert(highlight.id.clone(), self.highlights.len());
                self.highlights.push(highlight);
            }
        }
    }

    /// Remove a highlight. Returns false if it did not exist.
    pub fn remove_highlight(&mut self, id: &str) -> bool {
        if !self.highlight_positions.contains_key(id) {
            return false;
        }
        self.highlights.retain(|highlight| highlight.id != id);
        self.reindex_highlights();
        true
    }

    /// Remove a player together with all of their highlights.
    /// Returns false if the player did not exist.
    pub fn remove_player(&mut self, id: &str) -> bool {
        if !self.player_positions.contains_key(id) {
            return false;
        }
        self.players.retain(|player| player.id != id);
        self.highlights.retain(|highlight| highlight.player_id != id);
        self.reindex_players();
        self.reindex_highlights();
        true
    }

    /// (players, highlights)
    pub fn counts(&self) -> (usize, usize) {
        (self.players.len(), self.highlights.len())
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.highlights.is_empty()
    }

    fn reindex_players(&mut self) {
        self.player_positions = self
            .players
            .iter()
            .enumerate()
            .map(|(pos, player)| (player.id.clone(), pos))
            .collect();
    }

    fn reindex_highlights(&mut self) {
        self.highlight_positions = self
            .highlights
            .iter()
            .enumerate()
            .map(|(pos, highlight)| (highlight.id.clone(), pos))
            .collect();
    }
}
