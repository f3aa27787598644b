//! Errors raised while turning UI input into pipeline configuration.
//!
//! Filtering and sorting themselves never fail; only parsing a sort key,
//! a date range or a FilterState snapshot can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Unknown sort key: {0} (expected date, duration, confidence or relevance)")]
    UnknownSortKey(String),

    #[error("Unknown date range: {0} (expected all, week, month, season or year)")]
    UnknownDateRange(String),

    #[error("Confidence threshold {0} is outside 0..=100")]
    ThresholdOutOfRange(u8),

    #[error("Invalid filter state: {0}")]
    InvalidState(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
