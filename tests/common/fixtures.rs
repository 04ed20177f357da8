//! Test fixture creation for record trees and the warehouse database.

use super::constants::*;
use anyhow::Result;
use jukebox_warehouse::warehouse::WarehouseStore;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A warehouse on a temporary database file plus catalog and event-log trees
/// for it to ingest. Dropping it removes everything.
pub struct TestWarehouse {
    pub dir: TempDir,
    pub catalog_dir: PathBuf,
    pub events_dir: PathBuf,
    pub store: WarehouseStore,
}

impl TestWarehouse {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let catalog_dir = dir.path().join("song_data");
        let events_dir = dir.path().join("log_data");
        fs::create_dir_all(&catalog_dir)?;
        fs::create_dir_all(&events_dir)?;
        let store = WarehouseStore::open(dir.path().join("warehouse.db"))?;
        Ok(TestWarehouse {
            dir,
            catalog_dir,
            events_dir,
            store,
        })
    }

    /// Write the two standard catalog fixtures under nested directories,
    /// mirroring the natural-key prefix layout of the real trees.
    pub fn write_standard_catalog(&self) -> Result<()> {
        write_record_file(
            &self.catalog_dir.join("A/A/TRAAAAW128F429D538.json"),
            &catalog_record(
                SONG_1_ID,
                SONG_1_TITLE,
                ARTIST_1_ID,
                ARTIST_1_NAME,
                SONG_1_DURATION,
                1992,
            )
            .to_string(),
        )?;
        write_record_file(
            &self.catalog_dir.join("A/B/TRABBVJ128F92F7EAA.json"),
            &catalog_record(
                SONG_2_ID,
                SONG_2_TITLE,
                ARTIST_2_ID,
                ARTIST_2_NAME,
                SONG_2_DURATION,
                0,
            )
            .to_string(),
        )?;
        Ok(())
    }
}

/// Write one record file, creating parent directories as needed.
pub fn write_record_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// A complete catalog record as JSON.
pub fn catalog_record(
    song_id: &str,
    title: &str,
    artist_id: &str,
    artist_name: &str,
    duration: f64,
    year: i32,
) -> Value {
    json!({
        "num_songs": 1,
        "song_id": song_id,
        "title": title,
        "artist_id": artist_id,
        "artist_name": artist_name,
        "artist_location": "California - LA",
        "artist_latitude": 34.05349,
        "artist_longitude": -118.24532,
        "duration": duration,
        "year": year,
    })
}

/// One NextSong log line for the standard test user.
pub fn next_song_line(ts: i64, level: &str, song: &str, artist: &str, length: f64) -> String {
    json!({
        "artist": artist,
        "auth": "Logged In",
        "firstName": USER_1_FIRST_NAME,
        "gender": "M",
        "itemInSession": 0,
        "lastName": USER_1_LAST_NAME,
        "length": length,
        "level": level,
        "location": "San Jose-Sunnyvale-Santa Clara, CA",
        "method": "PUT",
        "page": "NextSong",
        "registration": 1540829025796i64,
        "sessionId": 583,
        "song": song,
        "status": 200,
        "ts": ts,
        "userAgent": "Mozilla/5.0",
        "userId": USER_1_ID,
    })
    .to_string()
}

/// One non-play log line (a logged-out page view with sparse fields).
pub fn non_play_line(ts: i64, page: &str) -> String {
    json!({
        "auth": "Logged Out",
        "itemInSession": 0,
        "method": "GET",
        "page": page,
        "sessionId": 100,
        "status": 200,
        "ts": ts,
        "userId": "",
    })
    .to_string()
}
