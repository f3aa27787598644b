//! Filter for the date-range selector.
//!
//! Compares calendar dates against a cutoff derived from the reference
//! date (see [`DateRange::cutoff`](crate::state::DateRange::cutoff)).

use crate::traits::{Filter, FilterContext};
use catalog::VideoHighlight;

/// Keeps highlights dated on or after the cutoff.
///
/// ## Algorithm
/// 1. "all" has no cutoff: keep everything, parseable or not
/// 2. Otherwise keep a highlight only if its date parses and is `>= cutoff`
/// 3. Unparseable dates fail closed and are dropped
pub struct DateRangeFilter;

impl Filter for DateRangeFilter {
    fn name(&self) -> &str {
        "DateRangeFilter"
    }

    fn apply(
        &self,
        highlights: Vec<VideoHighlight>,
        context: &FilterContext<'_>,
    ) -> Vec<VideoHighlight> {
        let Some(cutoff) = context.state.date_range.cutoff(context.reference_date) else {
            return highlights;
        };
        highlights
            .into_iter()
            .filter(|highlight| {
                highlight
                    .calendar_date()
                    .is_some_and(|date| date >= cutoff)
            })
            .collect()
    }
}
