//! Filter to enforce the minimum annotation confidence.

use crate::traits::{Filter, FilterContext};
use catalog::VideoHighlight;

/// Keeps highlights with `confidence >= confidence_threshold` (inclusive).
pub struct ConfidenceFilter;

impl Filter for ConfidenceFilter {
    fn name(&self) -> &str {
        "ConfidenceFilter"
    }

    fn apply(
        &self,
        highlights: Vec<VideoHighlight>,
        context: &FilterContext<'_>,
    ) -> Vec<VideoHighlight> {
        let threshold = context.state.confidence_threshold;
        highlights
            .into_iter()
            .filter(|highlight| highlight.confidence() >= threshold)
            .collect()
    }
}
