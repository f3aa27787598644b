//! Error types for the catalog crate.
//!
//! Only loading and validation can fail. Querying a Catalog never does.

use thiserror::Error;

/// Errors that can occur while loading or validating catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A data file was not a valid JSON array of records
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field} on record {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
