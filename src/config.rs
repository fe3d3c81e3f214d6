use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Working file, the read-write source of truth once it exists.
    #[serde(default = "default_working_file")]
    pub working_file: String,
    /// Read-only seed data, used only while the working file is absent.
    #[serde(default = "default_seed_file")]
    pub seed_file: String,
}

fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_working_file() -> String {
    "phonics.json".to_string()
}
fn default_seed_file() -> String {
    "default.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            working_file: default_working_file(),
            seed_file: default_seed_file(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("phonedit")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.working_file, "phonics.json");
        assert_eq!(config.seed_file, "default.json");
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let config: Config = toml::from_str(r#"theme = "catppuccin-mocha""#).unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.working_file, "phonics.json");
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.working_file, deserialized.working_file);
        assert_eq!(config.seed_file, deserialized.seed_file);
    }
}
