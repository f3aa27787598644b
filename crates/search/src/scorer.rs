//! Relevance Scorer
//!
//! Assigns an ordering score in [0, 100] to an entity that already passed
//! the matcher. Scores never decide inclusion.
//!
//! - Players have no native relevance signal, so every player match gets
//!   the same constant.
//! - Highlights use the AI annotation confidence as a proxy.

use catalog::{Player, VideoHighlight};

/// Score given to every matching player
pub const PLAYER_RELEVANCE_SCORE: u8 = 95;

pub trait Scored {
    fn relevance_score(&self) -> u8;
}

impl Scored for Player {
    fn relevance_score(&self) -> u8 {
        PLAYER_RELEVANCE_SCORE
    }
}

impl Scored for VideoHighlight {
    fn relevance_score(&self) -> u8 {
        self.ai_insights.confidence
    }
}
