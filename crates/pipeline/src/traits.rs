//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independent stages to be applied to a highlight collection.

use crate::state::FilterState;
use catalog::VideoHighlight;
use chrono::NaiveDate;

/// Everything a stage may look at besides the highlights themselves.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    /// Snapshot of the filter controls
    pub state: &'a FilterState,
    /// "Today" for date-range cutoffs
    pub reference_date: NaiveDate,
}

impl<'a> FilterContext<'a> {
    pub fn new(state: &'a FilterState, reference_date: NaiveDate) -> Self {
        Self {
            state,
            reference_date,
        }
    }
}

/// Core trait for filtering highlights.
///
/// ## Design Note
/// - `Send + Sync` lets one pipeline serve concurrent evaluations
/// - Filters take ownership of the Vec and return the retained subsequence
///   in the same order
/// - Stages are pure subset predicates on disjoint criteria, so they
///   commute and cannot fail
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of highlights.
    fn apply(
        &self,
        highlights: Vec<VideoHighlight>,
        context: &FilterContext<'_>,
    ) -> Vec<VideoHighlight>;
}
