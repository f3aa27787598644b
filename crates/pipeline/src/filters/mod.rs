//! Filter implementations for the highlight pipeline.
//!
//! This module contains the four stages that make up the grid filter.
//! Each is a pure subset predicate, so any order gives the same result.

pub mod player;
pub mod polarity;
pub mod confidence;
pub mod date_range;

// Re-export for convenience
pub use player::PlayerFilter;
pub use polarity::PolarityFilter;
pub use confidence::ConfidenceFilter;
pub use date_range::DateRangeFilter;
