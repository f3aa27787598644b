//! # Search Crate
//!
//! Free-text search across the two entity types of the catalog.
//!
//! ## Components
//!
//! ### Text Matcher
//! Case-insensitive substring test over each entity's text fields:
//! - Players: name, team, position, nationality
//! - Highlights: title, match, description, every tag
//!
//! ### Relevance Scorer
//! Ordering-only score: a constant 95 for players, annotation
//! confidence for highlights.
//!
//! ### Search Engine
//! Matches, scores, merges (players first), stable-sorts by score and
//! caps the list at 5 results.
//!
//! ## Example Usage
//!
//! ```ignore
//! use search::SearchEngine;
//!
//! let engine = SearchEngine::new();
//! let results = engine.search("messi", catalog.players(), catalog.highlights());
//! for result in &results {
//!     println!("[{}] {} ({})", result.kind, result.title, result.relevance_score);
//! }
//! ```

pub mod types;
pub mod matcher;
pub mod scorer;
pub mod engine;

// Re-export commonly used types
pub use types::{ResultKind, SearchResult, SearchScope, UnknownScope};
pub use matcher::{matches, Query, Searchable};
pub use scorer::{Scored, PLAYER_RELEVANCE_SCORE};
pub use engine::SearchEngine;
