//! Configuration Module
//! Input file locations, optionally overridden by `urbanscope.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "urbanscope.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub cities_csv: PathBuf,
    pub buildings_csv: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cities_csv: PathBuf::from("data/cities.csv"),
            buildings_csv: PathBuf::from("data/buildings.csv"),
        }
    }
}

impl AppConfig {
    /// Load the config file if present, falling back to the defaults.
    /// A malformed file is reported and ignored.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from))
        {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_shipped_data() {
        let config = AppConfig::default();
        assert_eq!(config.cities_csv, PathBuf::from("data/cities.csv"));
        assert_eq!(config.buildings_csv, PathBuf::from("data/buildings.csv"));
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "cities_csv": "elsewhere/cities.csv" }"#).unwrap();
        assert_eq!(config.cities_csv, PathBuf::from("elsewhere/cities.csv"));
        assert_eq!(config.buildings_csv, PathBuf::from("data/buildings.csv"));
    }
}
