//! Filter driven by the strengths/weaknesses toggles.
//!
//! The four toggle combinations map to this table:
//!
//! | strengths | weaknesses | retained                 |
//! |-----------|------------|--------------------------|
//! | off       | off        | neutral only             |
//! | off       | on         | everything but strengths |
//! | on        | off        | everything but weaknesses|
//! | on        | on         | everything               |
//!
//! The one-toggle rows are exclusions, so neutral clips survive them, and
//! "both off" falls back to neutral rather than to an empty grid.

use crate::traits::{Filter, FilterContext};
use catalog::{HighlightType, VideoHighlight};

pub struct PolarityFilter;

impl Filter for PolarityFilter {
    fn name(&self) -> &str {
        "PolarityFilter"
    }

    fn apply(
        &self,
        highlights: Vec<VideoHighlight>,
        context: &FilterContext<'_>,
    ) -> Vec<VideoHighlight> {
        let state = context.state;
        let keep: fn(HighlightType) -> bool = match (state.show_strengths, state.show_weaknesses) {
            (false, false) => |kind| kind == HighlightType::Neutral,
            (false, true) => |kind| kind != HighlightType::Strength,
            (true, false) => |kind| kind != HighlightType::Weakness,
            (true, true) => return highlights,
        };
        highlights
            .into_iter()
            .filter(|highlight| keep(highlight.highlight_type))
            .collect()
    }
}
