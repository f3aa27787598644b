//! Pipeline for filtering and ordering the highlight grid.
//!
//! This crate provides:
//! - FilterState, the snapshot of the UI's filter controls
//! - Filter trait and the four grid stages
//! - FilterPipeline for composing filters
//! - The Sort Stage (`sort_highlights`)
//!
//! ## Architecture
//! The grid is produced in two steps:
//! 1. Filters drop highlights (player, polarity, confidence, date range)
//! 2. The remaining highlights are stably sorted by one of four keys
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterContext, FilterPipeline, FilterState, SortKey, sort_highlights};
//!
//! let pipeline = FilterPipeline::standard();
//! let state = FilterState::default();
//! let context = FilterContext::new(&state, today);
//!
//! let filtered = pipeline.apply(highlights.to_vec(), &context);
//! let grid = sort_highlights(&filtered, SortKey::Confidence);
//! ```

pub mod error;
pub mod state;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;

// Re-export main types
pub use error::{PipelineError, Result};
pub use state::{DateRange, FilterState, PlayerSelection};
pub use traits::{Filter, FilterContext};
pub use filter_pipeline::FilterPipeline;
pub use sort::{duration_sort_key, sort_highlights, sort_in_place, SortKey};
