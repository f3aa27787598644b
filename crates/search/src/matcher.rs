//! Text Matcher - case-insensitive substring test over an entity's fields
//!
//! ## Algorithm
//! 1. Lower-case the query once
//! 2. Lower-case each searchable field of the entity
//! 3. The entity matches if any single field contains the query
//!
//! There is no tokenizing and no word boundaries: "ess" matches "Messi".
//! A blank query matches nothing.

use catalog::{Player, VideoHighlight};

/// An entity the search box can find.
pub trait Searchable {
    /// Text fields tested against the query, in no particular priority.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Player {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.team, &self.position, &self.nationality]
    }
}

impl Searchable for VideoHighlight {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![&self.title, &self.match_name, &self.description];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

/// A normalized, non-blank query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    /// Normalize `raw`. Returns `None` for an empty or whitespace-only
    /// query, which by definition matches nothing.
    ///
    /// Only blankness is judged on the trimmed text; the needle itself
    /// keeps surrounding spaces.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self {
            needle: raw.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Does any searchable field of `entity` contain this query?
    pub fn matches<T: Searchable + ?Sized>(&self, entity: &T) -> bool {
        entity
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// One-shot form of [`Query::matches`]; false for a blank query.
pub fn matches<T: Searchable + ?Sized>(entity: &T, raw_query: &str) -> bool {
    Query::parse(raw_query).is_some_and(|query| query.matches(entity))
}
