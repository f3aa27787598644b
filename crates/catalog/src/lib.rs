//! # Catalog Crate
//!
//! This crate holds the entity model of the highlight dashboard and an
//! in-memory store for it.
//!
//! ## Main Components
//!
//! - **types**: Player, VideoHighlight and the Catalog store
//! - **parser**: Parse the players/highlights JSON exports
//! - **index**: Build and validate a Catalog from a data directory
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_dir(Path::new("data"))?;
//!
//! let messi = catalog.get_player("messi").unwrap();
//! let clips = catalog.highlights_for_player("messi");
//!
//! println!("{} has {} highlights", messi.name, clips.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    PlayerId,
    HighlightId,
    // Core types
    Player,
    PlayerStats,
    RecentPerformance,
    VideoHighlight,
    HighlightType,
    Timestamp,
    AiInsights,
    Catalog,
    // Helpers
    parse_calendar_date,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_player(id: &str, name: &str) -> Player {
        Player {
            id: id.to_string(),
            name: name.to_string(),
            position: "Forward".to_string(),
            team: "Barcelona".to_string(),
            age: 36,
            nationality: "Argentina".to_string(),
            avatar: None,
            stats: PlayerStats {
                dribbling: 95,
                finishing: 92,
                passing: 88,
                defense: 45,
                speed: 85,
                strength: 70,
            },
            recent_performance: RecentPerformance {
                goals: 12,
                assists: 8,
                average_rating: 8.7,
                minutes_played: 847,
            },
        }
    }

    fn sample_highlight(id: &str, player_id: &str) -> VideoHighlight {
        VideoHighlight {
            id: id.to_string(),
            player_id: player_id.to_string(),
            title: "Exceptional Dribbling vs Real Madrid".to_string(),
            description: "Beats multiple defenders in tight spaces.".to_string(),
            match_name: "Barcelona vs Real Madrid".to_string(),
            date: "2024-03-15".to_string(),
            duration: "0:45".to_string(),
            tags: vec!["Dribbling".to_string()],
            highlight_type: HighlightType::Strength,
            timestamp: Timestamp { start: 120, end: 165 },
            ai_insights: AiInsights {
                confidence: 98,
                analysis: "Exceptional ball control.".to_string(),
                key_moments: vec!["Initial touch".to_string()],
            },
            video_url: "/videos/messi-dribbling-1.mp4".to_string(),
            thumbnail: String::new(),
        }
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.counts(), (0, 0));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_insert_player() {
        let mut catalog = Catalog::new();
        catalog.insert_player(sample_player("messi", "Lionel Messi"));

        let retrieved = catalog.get_player("messi").unwrap();
        assert_eq!(retrieved.name, "Lionel Messi");
        assert_eq!(retrieved.stats.dribbling, 95);
    }

    #[test]
    fn test_insert_replaces_same_id_in_place() {
        let mut catalog = Catalog::new();
        catalog.insert_player(sample_player("messi", "Lionel Messi"));
        catalog.insert_player(sample_player("haaland", "Erling Haaland"));
        catalog.insert_player(sample_player("messi", "Leo Messi"));

        assert_eq!(catalog.counts(), (2, 0));
        assert_eq!(catalog.players()[0].name, "Leo Messi");
        assert_eq!(catalog.players()[1].id, "haaland");
    }

    #[test]
    fn test_highlights_for_player_keeps_order() {
        let mut catalog = Catalog::new();
        catalog.insert_highlight(sample_highlight("1", "messi"));
        catalog.insert_highlight(sample_highlight("2", "ronaldo"));
        catalog.insert_highlight(sample_highlight("3", "messi"));

        let ids: Vec<&str> = catalog
            .highlights_for_player("messi")
            .iter()
            .map(|h| h.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_remove_player_cascades() {
        let mut catalog = Catalog::new();
        catalog.insert_player(sample_player("messi", "Lionel Messi"));
        catalog.insert_player(sample_player("haaland", "Erling Haaland"));
        catalog.insert_highlight(sample_highlight("1", "messi"));
        catalog.insert_highlight(sample_highlight("2", "haaland"));

        assert!(catalog.remove_player("messi"));
        assert!(!catalog.remove_player("messi"));

        assert_eq!(catalog.counts(), (1, 1));
        assert!(catalog.get_highlight("1").is_none());
        assert_eq!(catalog.get_highlight("2").unwrap().player_id, "haaland");
        assert_eq!(catalog.get_player("haaland").unwrap().name, "Erling Haaland");
    }

    #[test]
    fn test_remove_highlight_reindexes() {
        let mut catalog = Catalog::new();
        catalog.insert_highlight(sample_highlight("1", "messi"));
        catalog.insert_highlight(sample_highlight("2", "messi"));

        assert!(catalog.remove_highlight("1"));
        assert_eq!(catalog.get_highlight("2").unwrap().id, "2");
        assert!(!catalog.remove_highlight("1"));
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();
        assert!(catalog.get_player("nobody").is_none());
        assert!(catalog.get_highlight("999").is_none());
        assert!(catalog.highlights_for_player("nobody").is_empty());
    }
}
