use anyhow::{bail, Context, Result};
use clap::Parser;
use jukebox_warehouse::config::{AppConfig, CliConfig, FileConfig};
use jukebox_warehouse::pipeline::{ingest_catalog, ingest_events};
use jukebox_warehouse::warehouse::WarehouseStore;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite warehouse database file (created if absent).
    #[clap(value_parser = parse_path)]
    pub warehouse_db: PathBuf,

    /// Root directory of catalog files (one JSON record per file).
    #[clap(long, value_parser = parse_path)]
    pub catalog_dir: Option<PathBuf>,

    /// Root directory of session log files (one JSON record per line).
    #[clap(long, value_parser = parse_path)]
    pub events_dir: Option<PathBuf>,

    /// Optional TOML config file; values there override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        warehouse_db: Some(cli_args.warehouse_db),
        catalog_dir: cli_args.catalog_dir,
        events_dir: cli_args.events_dir,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let mut store = WarehouseStore::open(&config.warehouse_db)?;

    let mut failed_files = 0;
    if let Some(catalog_dir) = &config.catalog_dir {
        let report = ingest_catalog(&mut store, catalog_dir)?;
        info!(
            "Catalog ingestion done: {}/{} files loaded",
            report.files_processed, report.files_found
        );
        failed_files += report.failures.len();
    }
    if let Some(events_dir) = &config.events_dir {
        let report = ingest_events(&mut store, events_dir)?;
        info!(
            "Event ingestion done: {}/{} files loaded",
            report.files_processed, report.files_found
        );
        failed_files += report.failures.len();
    }

    info!(
        "Warehouse now holds {} artists, {} songs, {} users, {} time rows, {} songplays",
        store.artists_count(),
        store.songs_count(),
        store.users_count(),
        store.time_count(),
        store.songplays_count()
    );

    if failed_files > 0 {
        bail!("{} file(s) failed to ingest, see log for details", failed_files);
    }
    Ok(())
}
