//! Catalog building and validation logic.
//!
//! This module builds a Catalog from the data directory:
//! - Parse players.json and highlights.json (in parallel)
//! - Insert records, keeping ids unique
//! - Validate value ranges and clip windows
//! - Report dangling player references without rejecting them

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{error, info, warn};

impl Catalog {
    /// Load the catalog from a directory holding `players.json` and
    /// `highlights.json`.
    ///
    /// Steps:
    /// 1. Parse both files in parallel
    /// 2. Insert all records
    /// 3. Validate data ranges
    /// 4. Log dangling highlight references
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading highlight catalog from {:?}", data_dir);

        let players_path = data_dir.join("players.json");
        let highlights_path = data_dir.join("highlights.json");

        let (players, highlights) = rayon::join(
            || parser::parse_players(&players_path),
            || parser::parse_highlights(&highlights_path),
        );
        let players = players?;
        let highlights = highlights?;

        info!(
            "Loaded {} players, {} highlights",
            players.len(),
            highlights.len()
        );

        let catalog = Self::from_records(players, highlights);
        catalog.validate()?;

        for highlight in catalog.dangling_highlights() {
            warn!(
                highlight_id = %highlight.id,
                player_id = %highlight.player_id,
                "Highlight references an unknown player"
            );
        }

        Ok(catalog)
    }

    /// Like [`Catalog::load_from_dir`], but a failed load is logged and
    /// yields an empty catalog. An empty catalog is a normal input for the
    /// discovery engine.
    pub fn load_or_empty(data_dir: &Path) -> Self {
        match Self::load_from_dir(data_dir) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("Failed to load catalog from {:?}: {}", data_dir, e);
                Self::new()
            }
        }
    }

    /// Build a catalog from already-parsed records, in order.
    pub fn from_records(players: Vec<Player>, highlights: Vec<VideoHighlight>) -> Self {
        let mut catalog = Self::new();
        for player in players {
            catalog.insert_player(player);
        }
        for highlight in highlights {
            catalog.insert_highlight(highlight);
        }
        catalog
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every player stat is in [0, 100]
    /// - Every highlight confidence is in [0, 100]
    /// - Every clip window has `start < end`
    ///
    /// Dangling `player_id` references are tolerated here; see
    /// [`Catalog::dangling_highlights`].
    pub fn validate(&self) -> Result<()> {
        for player in &self.players {
            for (name, value) in player.stats.attributes() {
                if value > PlayerStats::MAX {
                    return Err(CatalogError::InvalidValue {
                        id: player.id.clone(),
                        field: format!("stats.{}", name),
                        value: value.to_string(),
                    });
                }
            }
        }

        for highlight in &self.highlights {
            if highlight.ai_insights.confidence > 100 {
                return Err(CatalogError::InvalidValue {
                    id: highlight.id.clone(),
                    field: "ai_insights.confidence".to_string(),
                    value: highlight.ai_insights.confidence.to_string(),
                });
            }
            if !highlight.timestamp.is_valid() {
                return Err(CatalogError::InvalidValue {
                    id: highlight.id.clone(),
                    field: "timestamp".to_string(),
                    value: format!(
                        "{}..{}",
                        highlight.timestamp.start, highlight.timestamp.end
                    ),
                });
            }
        }
        Ok(())
    }

    /// Highlights whose `player_id` does not resolve to a player.
    pub fn dangling_highlights(&self) -> Vec<&VideoHighlight> {
        self.highlights
            .iter()
            .filter(|highlight| !self.player_positions.contains_key(&highlight.player_id))
            .collect()
    }
}
