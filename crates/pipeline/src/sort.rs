//! Sort Stage - final ordering of the filtered grid.
//!
//! All keys use stable sorts, so ties keep their filtered order.
//!
//! ## Keys
//! - `date`: most recent first; unparseable dates go last
//! - `duration`: ascending by the digits of `m:ss` read as one integer
//!   ("1:05" -> 105). This is digit concatenation, not elapsed seconds.
//! - `confidence` / `relevance`: highest confidence first (aliases)

use crate::error::PipelineError;
use catalog::VideoHighlight;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Duration,
    Confidence,
    Relevance,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Date => "date",
            SortKey::Duration => "duration",
            SortKey::Confidence => "confidence",
            SortKey::Relevance => "relevance",
        };
        f.write_str(name)
    }
}

impl FromStr for SortKey {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "duration" => Ok(SortKey::Duration),
            "confidence" => Ok(SortKey::Confidence),
            "relevance" => Ok(SortKey::Relevance),
            _ => Err(PipelineError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Numeric key for the duration sort.
///
/// Drops the first `:` and reads the leading digits as one integer, so
/// "1:05" -> 105 and "10:00" -> 1000. Text without leading digits has no
/// key and sorts last.
pub fn duration_sort_key(duration: &str) -> Option<u64> {
    let joined = duration.trim().replacen(':', "", 1);
    let digits: String = joined.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Return a sorted copy of `highlights`; the input is left untouched.
pub fn sort_highlights(highlights: &[VideoHighlight], key: SortKey) -> Vec<VideoHighlight> {
    let mut sorted = highlights.to_vec();
    sort_in_place(&mut sorted, key);
    sorted
}

/// Stable in-place form of [`sort_highlights`], for callers that already
/// own their copy.
pub fn sort_in_place(highlights: &mut [VideoHighlight], key: SortKey) {
    match key {
        SortKey::Date => {
            highlights.sort_by_key(|h| {
                let date = h.calendar_date();
                (date.is_none(), Reverse(date))
            });
        }
        SortKey::Duration => {
            highlights.sort_by_key(|h| {
                let value = duration_sort_key(&h.duration);
                (value.is_none(), value)
            });
        }
        SortKey::Confidence | SortKey::Relevance => {
            highlights.sort_by_key(|h| Reverse(h.confidence()));
        }
    }
}
