//! SQLite-backed warehouse store.
//!
//! One `WarehouseStore` holds the single connection for an ingestion run.
//! Writers obtain a `FileBatch` per source file; every row for that file goes
//! through the same transaction, and dropping the batch without `commit`
//! rolls the whole file back.

use super::models::*;
use super::schema::{WAREHOUSE_SCHEMA_SQL, WAREHOUSE_SCHEMA_VERSION};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, Transaction};
use std::path::Path;
use tracing::{debug, info};

/// SQLite-backed store for the star schema.
pub struct WarehouseStore {
    conn: Connection,
}

fn init_schema(conn: &Connection) -> Result<()> {
    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    if db_version == 0 {
        info!(
            "Creating warehouse schema at version {}",
            WAREHOUSE_SCHEMA_VERSION
        );
        conn.execute_batch(WAREHOUSE_SCHEMA_SQL)?;
        conn.pragma_update(None, "user_version", WAREHOUSE_SCHEMA_VERSION)?;
    }
    Ok(())
}

impl WarehouseStore {
    /// Open (or create) the warehouse database at `db_path`.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            db_path.as_ref(),
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open warehouse database")?;

        init_schema(&conn)?;
        Ok(WarehouseStore { conn })
    }

    /// Open an in-memory warehouse, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(WarehouseStore { conn })
    }

    /// Begin the unit of work for one source file.
    pub fn begin(&mut self) -> Result<FileBatch<'_>> {
        let tx = self.conn.transaction()?;
        Ok(FileBatch { tx })
    }

    /// Get a song dimension row by id.
    pub fn get_song(&self, song_id: &str) -> Result<Option<SongRow>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT song_id, title, artist_id, year, duration FROM songs WHERE song_id = ?1",
        )?;
        match stmt.query_row(params![song_id], |row| {
            Ok(SongRow {
                song_id: row.get(0)?,
                title: row.get(1)?,
                artist_id: row.get(2)?,
                year: row.get(3)?,
                duration: row.get(4)?,
            })
        }) {
            Ok(song) => Ok(Some(song)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get an artist dimension row by id.
    pub fn get_artist(&self, artist_id: &str) -> Result<Option<ArtistRow>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT artist_id, name, location, latitude, longitude FROM artists WHERE artist_id = ?1",
        )?;
        match stmt.query_row(params![artist_id], |row| {
            Ok(ArtistRow {
                artist_id: row.get(0)?,
                name: row.get(1)?,
                location: row.get(2)?,
                latitude: row.get(3)?,
                longitude: row.get(4)?,
            })
        }) {
            Ok(artist) => Ok(Some(artist)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get a user dimension row by id.
    pub fn get_user(&self, user_id: &str) -> Result<Option<UserRow>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT user_id, first_name, last_name, gender, level FROM users WHERE user_id = ?1",
        )?;
        match stmt.query_row(params![user_id], |row| {
            Ok(UserRow {
                user_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                gender: row.get(3)?,
                level: row.get(4)?,
            })
        }) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get all songplay fact rows, oldest surrogate id first.
    pub fn get_songplays(&self) -> Result<Vec<SongplayRow>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT start_time, user_id, level, song_id, artist_id, session_id, location, user_agent
             FROM songplays ORDER BY songplay_id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SongplayRow {
                    start_time: row.get(0)?,
                    user_id: row.get(1)?,
                    level: row.get(2)?,
                    song_id: row.get(3)?,
                    artist_id: row.get(4)?,
                    session_id: row.get(5)?,
                    location: row.get(6)?,
                    user_agent: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn count(&self, table: &str) -> usize {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| {
                r.get::<_, i64>(0)
            })
            .unwrap_or(0) as usize
    }

    /// Get the number of artist dimension rows.
    pub fn artists_count(&self) -> usize {
        self.count("artists")
    }

    /// Get the number of song dimension rows.
    pub fn songs_count(&self) -> usize {
        self.count("songs")
    }

    /// Get the number of user dimension rows.
    pub fn users_count(&self) -> usize {
        self.count("users")
    }

    /// Get the number of time dimension rows.
    pub fn time_count(&self) -> usize {
        self.count("time")
    }

    /// Get the number of songplay fact rows.
    pub fn songplays_count(&self) -> usize {
        self.count("songplays")
    }
}

/// The unit of work for one source file.
///
/// Dropping the batch without calling `commit` rolls back everything written
/// through it, so a file that fails partway leaves no visible rows.
pub struct FileBatch<'c> {
    tx: Transaction<'c>,
}

impl FileBatch<'_> {
    /// Upsert an artist dimension row by its natural key.
    pub fn upsert_artist(&self, artist: &ArtistRow) -> Result<()> {
        let mut stmt = self.tx.prepare_cached(
            "INSERT INTO artists (artist_id, name, location, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(artist_id) DO UPDATE SET
                 name = excluded.name,
                 location = excluded.location,
                 latitude = excluded.latitude,
                 longitude = excluded.longitude",
        )?;
        stmt.execute(params![
            &artist.artist_id,
            &artist.name,
            &artist.location,
            artist.latitude,
            artist.longitude,
        ])?;
        Ok(())
    }

    /// Upsert a song dimension row by its natural key.
    pub fn upsert_song(&self, song: &SongRow) -> Result<()> {
        let mut stmt = self.tx.prepare_cached(
            "INSERT INTO songs (song_id, title, artist_id, year, duration)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(song_id) DO UPDATE SET
                 title = excluded.title,
                 artist_id = excluded.artist_id,
                 year = excluded.year,
                 duration = excluded.duration",
        )?;
        stmt.execute(params![
            &song.song_id,
            &song.title,
            &song.artist_id,
            song.year,
            song.duration,
        ])?;
        Ok(())
    }

    /// Upsert a user dimension row. Overwriting on conflict is what makes
    /// subscription level changes propagate in event order.
    pub fn upsert_user(&self, user: &UserRow) -> Result<()> {
        let mut stmt = self.tx.prepare_cached(
            "INSERT INTO users (user_id, first_name, last_name, gender, level)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(user_id) DO UPDATE SET
                 first_name = excluded.first_name,
                 last_name = excluded.last_name,
                 gender = excluded.gender,
                 level = excluded.level",
        )?;
        stmt.execute(params![
            &user.user_id,
            &user.first_name,
            &user.last_name,
            &user.gender,
            &user.level,
        ])?;
        Ok(())
    }

    /// Insert a time dimension row, keeping one row per distinct timestamp.
    pub fn insert_time(&self, time: &TimeRow) -> Result<()> {
        let mut stmt = self.tx.prepare_cached(
            "INSERT INTO time (start_time, hour, day, week, month, year, weekday)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(start_time) DO NOTHING",
        )?;
        stmt.execute(params![
            time.start_time,
            time.hour,
            time.day,
            time.week,
            time.month,
            time.year,
            time.weekday,
        ])?;
        Ok(())
    }

    /// Append a songplay fact row. The surrogate id is generated by SQLite.
    pub fn insert_songplay(&self, play: &SongplayRow) -> Result<()> {
        let mut stmt = self.tx.prepare_cached(
            "INSERT INTO songplays
                 (start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        stmt.execute(params![
            play.start_time,
            &play.user_id,
            &play.level,
            &play.song_id,
            &play.artist_id,
            play.session_id,
            &play.location,
            &play.user_agent,
        ])?;
        Ok(())
    }

    /// Resolve a play's (title, artist name, duration) to catalog ids.
    ///
    /// Returns the (song_id, artist_id) pair only for a unique exact match.
    /// Duration is compared as stored, with no tolerance. Zero matches and
    /// multiple matches both resolve to `None`; the ambiguous case is only
    /// surfaced as a diagnostic.
    pub fn resolve_song(
        &self,
        title: &str,
        artist_name: &str,
        duration: f64,
    ) -> Result<Option<(String, String)>> {
        let mut stmt = self.tx.prepare_cached(
            "SELECT s.song_id, a.artist_id
             FROM songs s
             INNER JOIN artists a ON s.artist_id = a.artist_id
             WHERE s.title = ?1 AND a.name = ?2 AND s.duration = ?3
             LIMIT 2",
        )?;
        let matches = stmt
            .query_map(params![title, artist_name, duration], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        match matches.len() {
            1 => Ok(Some(matches.into_iter().next().unwrap())),
            0 => Ok(None),
            _ => {
                debug!(
                    "Ambiguous catalog match for '{}' by '{}' ({}s), resolving to no match",
                    title, artist_name, duration
                );
                Ok(None)
            }
        }
    }

    /// Commit every row written for this file.
    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }
}
