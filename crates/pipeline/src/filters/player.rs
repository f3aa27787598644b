//! Filter to restrict the grid to one player's highlights.

use crate::state::PlayerSelection;
use crate::traits::{Filter, FilterContext};
use catalog::VideoHighlight;

/// Keeps highlights whose `player_id` equals the selected player.
/// With "all" selected this is a no-op.
pub struct PlayerFilter;

impl Filter for PlayerFilter {
    fn name(&self) -> &str {
        "PlayerFilter"
    }

    fn apply(
        &self,
        highlights: Vec<VideoHighlight>,
        context: &FilterContext<'_>,
    ) -> Vec<VideoHighlight> {
        let PlayerSelection::Player(player_id) = &context.state.selected_player else {
            return highlights;
        };
        highlights
            .into_iter()
            .filter(|highlight| &highlight.player_id == player_id)
            .collect()
    }
}
