//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern.

use crate::filters::{ConfidenceFilter, DateRangeFilter, PlayerFilter, PolarityFilter};
use crate::traits::{Filter, FilterContext};
use catalog::VideoHighlight;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(PlayerFilter)
///     .add_filter(ConfidenceFilter);
///
/// let context = FilterContext::new(&state, today);
/// let visible = pipeline.apply(highlights, &context);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The grid pipeline: player, polarity, confidence, date range.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(PlayerFilter)
            .add_filter(PolarityFilter)
            .add_filter(ConfidenceFilter)
            .add_filter(DateRangeFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the highlights.
    ///
    /// ## Algorithm
    /// 1. Start with the input highlights
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set, in input order
    pub fn apply(
        &self,
        highlights: Vec<VideoHighlight>,
        context: &FilterContext<'_>,
    ) -> Vec<VideoHighlight> {
        let mut current = highlights;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
