use super::TransformError;
use crate::records::CatalogRecord;
use crate::warehouse::{ArtistRow, SongRow};

/// Map one catalog record to exactly one artist row and one song row.
///
/// Pure mapping, no lookups. `song_id`, `title`, `artist_id` and `duration`
/// are required; `year` defaults to 0 and the geo/location fields pass
/// through as NULLs when absent.
pub fn transform_catalog(record: &CatalogRecord) -> Result<(ArtistRow, SongRow), TransformError> {
    let song_id = require(&record.song_id, "song_id")?;
    let title = require(&record.title, "title")?;
    let artist_id = require(&record.artist_id, "artist_id")?;
    let duration = record
        .duration
        .ok_or(TransformError::IncompleteCatalogEntry { field: "duration" })?;

    let artist = ArtistRow {
        artist_id: artist_id.clone(),
        name: record.artist_name.clone().unwrap_or_default(),
        location: record.artist_location.clone(),
        latitude: record.artist_latitude,
        longitude: record.artist_longitude,
    };

    let song = SongRow {
        song_id,
        title,
        artist_id,
        year: record.year.unwrap_or(0),
        duration,
    };

    Ok((artist, song))
}

fn require(field: &Option<String>, name: &'static str) -> Result<String, TransformError> {
    field
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or(TransformError::IncompleteCatalogEntry { field: name })
}
