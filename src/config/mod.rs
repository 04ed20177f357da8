mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub warehouse_db: Option<PathBuf>,
    pub catalog_dir: Option<PathBuf>,
    pub events_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub warehouse_db: PathBuf,
    pub catalog_dir: Option<PathBuf>,
    pub events_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let warehouse_db = file
            .warehouse_db
            .map(PathBuf::from)
            .or_else(|| cli.warehouse_db.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("warehouse_db must be specified via CLI or in config file")
            })?;

        let catalog_dir = file
            .catalog_dir
            .map(PathBuf::from)
            .or_else(|| cli.catalog_dir.clone());
        let events_dir = file
            .events_dir
            .map(PathBuf::from)
            .or_else(|| cli.events_dir.clone());

        if catalog_dir.is_none() && events_dir.is_none() {
            bail!("Nothing to ingest: specify --catalog-dir and/or --events-dir");
        }

        for (name, dir) in [("catalog_dir", &catalog_dir), ("events_dir", &events_dir)] {
            if let Some(dir) = dir {
                if !dir.exists() {
                    bail!("{} does not exist: {:?}", name, dir);
                }
                if !dir.is_dir() {
                    bail!("{} is not a directory: {:?}", name, dir);
                }
            }
        }

        Ok(AppConfig {
            warehouse_db,
            catalog_dir,
            events_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_overrides_cli() {
        let dir = tempfile::tempdir().unwrap();
        let cli = CliConfig {
            warehouse_db: Some(PathBuf::from("/cli/warehouse.db")),
            catalog_dir: Some(dir.path().to_path_buf()),
            events_dir: None,
        };
        let file = FileConfig {
            warehouse_db: Some("/toml/warehouse.db".to_string()),
            ..Default::default()
        };
        let config = AppConfig::resolve(&cli, Some(file)).unwrap();
        assert_eq!(config.warehouse_db, PathBuf::from("/toml/warehouse.db"));
        assert_eq!(config.catalog_dir, Some(dir.path().to_path_buf()));
    }

    #[test]
    fn requires_at_least_one_tree() {
        let cli = CliConfig {
            warehouse_db: Some(PathBuf::from("/cli/warehouse.db")),
            catalog_dir: None,
            events_dir: None,
        };
        assert!(AppConfig::resolve(&cli, None).is_err());
    }

    #[test]
    fn rejects_missing_tree_directory() {
        let cli = CliConfig {
            warehouse_db: Some(PathBuf::from("/cli/warehouse.db")),
            catalog_dir: Some(PathBuf::from("/no/such/dir")),
            events_dir: None,
        };
        assert!(AppConfig::resolve(&cli, None).is_err());
    }
}
