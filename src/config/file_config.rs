use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub warehouse_db: Option<String>,
    pub catalog_dir: Option<String>,
    pub events_dir: Option<String>,
}

impl FileConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config() {
        let config: FileConfig = toml::from_str(
            r#"
            warehouse_db = "/data/warehouse.db"
            events_dir = "/data/log_data"
            "#,
        )
        .unwrap();
        assert_eq!(config.warehouse_db.as_deref(), Some("/data/warehouse.db"));
        assert_eq!(config.catalog_dir, None);
        assert_eq!(config.events_dir.as_deref(), Some("/data/log_data"));
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.warehouse_db, None);
    }
}
