use crate::error::{AddrBookError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for addrbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AddrBookConfig {
    /// Data file name or path. Relative values live under the data directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for AddrBookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl AddrBookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddrBookError::Io)?;
        let config: AddrBookConfig =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        Ok(config)
    }

    /// Absolute location of the data file, resolving relative names against `data_dir`.
    pub fn data_file_in(&self, data_dir: &Path) -> PathBuf {
        let path = Path::new(&self.data_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            data_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AddrBookConfig::default();
        assert_eq!(config.data_file, "addressbook.json");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = AddrBookConfig::load(temp.path().join("missing")).unwrap();
        assert_eq!(config, AddrBookConfig::default());
    }

    #[test]
    fn test_load_written_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "data_file": "work.json" }"#,
        )
        .unwrap();

        let loaded = AddrBookConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.data_file, "work.json");
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "data_file = 1").unwrap();
        assert!(matches!(
            AddrBookConfig::load(temp.path()),
            Err(AddrBookError::Serialization(_))
        ));
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let parsed: AddrBookConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AddrBookConfig::default());
    }

    #[test]
    fn test_data_file_resolution() {
        let temp = TempDir::new().unwrap();
        let relative = AddrBookConfig::default();
        assert_eq!(
            relative.data_file_in(temp.path()),
            temp.path().join("addressbook.json")
        );

        let absolute_path = temp.path().join("elsewhere").join("book.json");
        let absolute = AddrBookConfig {
            data_file: absolute_path.to_string_lossy().into_owned(),
        };
        assert_eq!(absolute.data_file_in(Path::new("/ignored")), absolute_path);
    }
}
