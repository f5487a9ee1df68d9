//! Application configuration
//!
//! Loaded and stored by confy in the platform config directory.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const STORE_FILENAME: &str = "todos.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the store file and log files
    pub data_directory: String,
    /// File name of the JSON task store inside the data directory
    pub store_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        let data_directory = ProjectDirs::from("", "", "tsugi")
            .map(|dirs| dirs.data_dir().to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string());

        Self {
            data_directory,
            store_filename: STORE_FILENAME.to_string(),
        }
    }
}

impl Config {
    /// Full path of the JSON task store.
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.data_directory).join(&self.store_filename)
    }

    /// Directory receiving rotated log files.
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_directory).join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_filename() {
        let config = Config::default();
        assert_eq!(config.store_filename, "todos.json");
        assert!(!config.data_directory.is_empty());
    }

    #[test]
    fn test_store_path_joins_directory_and_filename() {
        let config = Config {
            data_directory: "/tmp/tsugi".to_string(),
            store_filename: "todos.json".to_string(),
        };
        assert_eq!(config.store_path(), PathBuf::from("/tmp/tsugi/todos.json"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/tsugi/logs"));
    }

    #[test]
    fn test_config_roundtrips_through_serde() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.store_filename, parsed.store_filename);
        assert_eq!(config.data_directory, parsed.data_directory);
    }
}
