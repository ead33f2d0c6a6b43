use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Well-known relative path the companion data server exposes the catalog
/// document under.
pub const DEFAULT_DATA_URL: &str = "http://127.0.0.1:3000/data/catalog.json";

/// Kiosk configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Catalog source used when `--data` is not given.
    #[serde(default)]
    pub data: Option<String>,

    /// Placeholder image per category id, shown for subgroups without an
    /// image of their own and for images that fail to load.
    #[serde(default)]
    pub placeholders: HashMap<String, String>,
}

impl Config {
    /// Load config from the default location (~/.atelier/config.toml)
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the default config file path (~/.atelier/config.toml)
    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        Ok(PathBuf::from(home).join(".atelier").join("config.toml"))
    }

    /// Placeholder image for a category, if configured.
    pub fn placeholder_for(&self, category_id: &str) -> Option<&str> {
        self.placeholders.get(category_id).map(String::as_str)
    }

    /// The catalog source to use, in priority order: CLI flag, config
    /// file, well-known default.
    pub fn data_source(&self, cli_data: Option<&str>) -> String {
        cli_data
            .map(str::to_string)
            .or_else(|| self.data.clone())
            .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from(&PathBuf::from("/no/such/config.toml")).unwrap();
        assert!(config.data.is_none());
        assert!(config.placeholders.is_empty());
    }

    #[test]
    fn test_data_source_priority() {
        let mut config = Config::default();
        assert_eq!(config.data_source(None), DEFAULT_DATA_URL);

        config.data = Some("catalog.json".to_string());
        assert_eq!(config.data_source(None), "catalog.json");
        assert_eq!(config.data_source(Some("other.json")), "other.json");
    }

    #[test]
    fn test_parse_placeholders_table() {
        let content = r#"
            data = "/srv/kiosk/catalog.json"

            [placeholders]
            clay-tools = "place_holder_clay.png"
            stone-tools = "place_holder_stone.png"
        "#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(
            config.placeholder_for("clay-tools"),
            Some("place_holder_clay.png")
        );
        assert_eq!(config.placeholder_for("wax-tools"), None);
    }
}
