//! Parser for catalog data files.
//!
//! The data source exports two JSON arrays:
//! - players.json: Player records
//! - highlights.json: VideoHighlight records
//!
//! Keys follow the REST layer's snake_case convention; the camelCase
//! spelling used by the web client is accepted too (see the serde aliases
//! in `types`).

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a JSON array of records from `path`.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::ParseError {
        file: file_label(path),
        source,
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse the players.json file
pub fn parse_players(path: &Path) -> Result<Vec<Player>> {
    read_records(path)
}

/// Parse the highlights.json file
pub fn parse_highlights(path: &Path) -> Result<Vec<VideoHighlight>> {
    read_records(path)
}
