//! Discovery crate for the highlight dashboard.
//!
//! This crate contains the facade the UI calls: it composes the filter
//! pipeline and sort stage for the grid, and the search engine for the
//! search box.

pub mod engine;

pub use engine::{DiscoveryEngine, HighlightCard};
