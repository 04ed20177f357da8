//! Database schema for the analytics warehouse.
//!
//! Star layout:
//! - songplays: fact table, one row per NextSong event
//! - artists, songs, users, time: dimension tables keyed by natural ids

/// Schema version stamped into PRAGMA user_version.
pub const WAREHOUSE_SCHEMA_VERSION: usize = 1;

/// SQL schema for the warehouse database.
pub const WAREHOUSE_SCHEMA_SQL: &str = r#"
-- Artist dimension
CREATE TABLE IF NOT EXISTS artists (
    artist_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    location TEXT,
    latitude REAL,
    longitude REAL
);

-- Song dimension
CREATE TABLE IF NOT EXISTS songs (
    song_id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    artist_id TEXT NOT NULL,
    year INTEGER NOT NULL DEFAULT 0,
    duration REAL NOT NULL
);

-- User dimension (level is last-write-wins across the log corpus)
CREATE TABLE IF NOT EXISTS users (
    user_id TEXT PRIMARY KEY,
    first_name TEXT,
    last_name TEXT,
    gender TEXT,
    level TEXT NOT NULL
);

-- Time dimension, one row per distinct start_time (epoch milliseconds)
CREATE TABLE IF NOT EXISTS time (
    start_time INTEGER PRIMARY KEY,
    hour INTEGER NOT NULL,
    day INTEGER NOT NULL,
    week INTEGER NOT NULL,
    month INTEGER NOT NULL,
    year INTEGER NOT NULL,
    weekday INTEGER NOT NULL
);

-- Songplay fact table, append-only
CREATE TABLE IF NOT EXISTS songplays (
    songplay_id INTEGER PRIMARY KEY AUTOINCREMENT,
    start_time INTEGER NOT NULL,
    user_id TEXT NOT NULL,
    level TEXT,
    song_id TEXT,
    artist_id TEXT,
    session_id INTEGER,
    location TEXT,
    user_agent TEXT
);

-- Resolver lookup path: exact title + duration against songs
CREATE INDEX IF NOT EXISTS idx_songs_title_duration ON songs (title, duration);
CREATE INDEX IF NOT EXISTS idx_songplays_start_time ON songplays (start_time);
"#;
