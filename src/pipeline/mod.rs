//! Ingestion orchestration.
//!
//! Two independent runs share one store connection: the catalog tree feeds
//! the song and artist dimensions, the event-log tree feeds the time and user
//! dimensions plus the songplay facts. Each file is one transaction; a file
//! that fails is rolled back, reported, and does not stop the run.

mod walker;

pub use walker::find_record_files;

use crate::records;
use crate::transform;
use crate::warehouse::{SongplayRow, WarehouseStore};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// One file that failed to ingest, with the cause.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one ingestion run over one tree.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub files_found: usize,
    pub files_processed: usize,
    pub failures: Vec<FileFailure>,
}

impl IngestReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Ingest a tree of catalog files into the artist and song dimensions.
///
/// Safe to re-run: both dimensions are upserted by natural key.
pub fn ingest_catalog(store: &mut WarehouseStore, root: &Path) -> Result<IngestReport> {
    run(store, root, load_catalog_file)
}

/// Ingest a tree of session log files into the time and user dimensions and
/// the songplay fact table.
///
/// Dimensions are upsert-safe; facts are append-only, so re-running over the
/// same tree duplicates songplay rows.
pub fn ingest_events(store: &mut WarehouseStore, root: &Path) -> Result<IngestReport> {
    run(store, root, load_event_file)
}

fn run(
    store: &mut WarehouseStore,
    root: &Path,
    load: fn(&mut WarehouseStore, &Path) -> Result<()>,
) -> Result<IngestReport> {
    let files = find_record_files(root);
    let mut report = IngestReport {
        files_found: files.len(),
        ..Default::default()
    };
    info!("{} files found in {}", report.files_found, root.display());

    for (index, path) in files.iter().enumerate() {
        match load(store, path) {
            Ok(()) => {
                report.files_processed += 1;
                info!("{}/{} files processed.", index + 1, report.files_found);
            }
            Err(e) => {
                error!("Failed to ingest {}: {:#}", path.display(), e);
                report.failures.push(FileFailure {
                    path: path.clone(),
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    Ok(report)
}

fn load_catalog_file(store: &mut WarehouseStore, path: &Path) -> Result<()> {
    let record = records::read_catalog_file(path)
        .with_context(|| format!("decoding catalog file {}", path.display()))?;
    let (artist, song) = transform::transform_catalog(&record)
        .with_context(|| format!("transforming catalog file {}", path.display()))?;

    let batch = store.begin()?;
    batch.upsert_artist(&artist)?;
    batch.upsert_song(&song)?;
    batch.commit()?;
    Ok(())
}

fn load_event_file(store: &mut WarehouseStore, path: &Path) -> Result<()> {
    let events = records::read_event_file(path)
        .with_context(|| format!("decoding log file {}", path.display()))?;

    let batch = store.begin()?;
    for rows in transform::transform_events(events) {
        let rows = rows.with_context(|| format!("transforming log file {}", path.display()))?;

        batch.insert_time(&rows.time)?;
        batch.upsert_user(&rows.user)?;

        let resolved = match rows.play.lookup_key() {
            Some((title, artist, duration)) => batch.resolve_song(title, artist, duration)?,
            None => None,
        };
        let (song_id, artist_id) = match resolved {
            Some((song_id, artist_id)) => (Some(song_id), Some(artist_id)),
            None => (None, None),
        };

        batch.insert_songplay(&SongplayRow {
            start_time: rows.play.start_time,
            user_id: rows.play.user_id,
            level: rows.play.level,
            song_id,
            artist_id,
            session_id: rows.play.session_id,
            location: rows.play.location,
            user_agent: rows.play.user_agent,
        })?;
    }
    batch.commit()?;
    Ok(())
}
