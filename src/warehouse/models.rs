//! Row types for the dimension and fact tables.

use serde::{Deserialize, Serialize};

/// Artist dimension row, keyed by the catalog's natural artist id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ArtistRow {
    pub artist_id: String,
    pub name: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Song dimension row, keyed by the catalog's natural song id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SongRow {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub year: i32,
    pub duration: f64,
}

/// User dimension row. `level` reflects the most recently loaded event for
/// this user, in file-then-row order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserRow {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub level: String,
}

/// Time dimension row, derived from an epoch-millisecond timestamp in UTC.
/// `weekday` is Monday = 0 through Sunday = 6; `week` is the ISO week number.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRow {
    pub start_time: i64,
    pub hour: u32,
    pub day: u32,
    pub week: u32,
    pub month: u32,
    pub year: i32,
    pub weekday: u32,
}

/// Songplay fact row. The surrogate id is generated by the store; song and
/// artist FKs are NULL when resolution found no unique catalog match.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SongplayRow {
    pub start_time: i64,
    pub user_id: String,
    pub level: String,
    pub song_id: Option<String>,
    pub artist_id: Option<String>,
    pub session_id: Option<i64>,
    pub location: Option<String>,
    pub user_agent: Option<String>,
}
