use super::DecodeError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One song's metadata as it appears in a catalog file.
///
/// Every field is optional at this stage; the catalog transformer decides
/// which ones are required.
#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CatalogRecord {
    pub song_id: Option<String>,
    pub title: Option<String>,
    pub artist_id: Option<String>,
    pub artist_name: Option<String>,
    pub artist_location: Option<String>,
    pub artist_latitude: Option<f64>,
    pub artist_longitude: Option<f64>,
    pub duration: Option<f64>,
    pub year: Option<i32>,
}

/// Read a catalog file containing exactly one JSON record.
pub fn read_catalog_file(path: &Path) -> Result<CatalogRecord, DecodeError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(content.trim()).map_err(|e| DecodeError::Malformed {
        line: None,
        reason: e.to_string(),
    })
}
