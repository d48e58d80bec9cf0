use crate::api::AddressBookApi;
use crate::config::AddrBookConfig;
use crate::error::{AddrBookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::debug;
use std::env;
use std::path::PathBuf;

/// Directory used for both config and data when set.
pub const HOME_ENV: &str = "ADDRBOOK_HOME";
/// Full path of the data file, bypassing config.
pub const FILE_ENV: &str = "ADDRBOOK_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddrBookPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

pub struct AddrBookContext {
    pub api: AddressBookApi<FileStore>,
    pub data_file: PathBuf,
}

pub fn resolve_paths(home_override: Option<PathBuf>) -> Result<AddrBookPaths> {
    if let Some(home) = home_override {
        return Ok(AddrBookPaths {
            config_dir: home.clone(),
            data_dir: home,
        });
    }
    let proj_dirs = ProjectDirs::from("com", "addrbook", "addrbook")
        .ok_or_else(|| AddrBookError::Config("could not locate home directory".to_string()))?;
    Ok(AddrBookPaths {
        config_dir: proj_dirs.config_dir().to_path_buf(),
        data_dir: proj_dirs.data_dir().to_path_buf(),
    })
}

pub fn resolve_data_file(
    paths: &AddrBookPaths,
    config: &AddrBookConfig,
    file_override: Option<PathBuf>,
) -> PathBuf {
    file_override.unwrap_or_else(|| config.data_file_in(&paths.data_dir))
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Resolve paths from the environment, read config and open the book.
pub fn initialize() -> Result<AddrBookContext> {
    let paths = resolve_paths(env_path(HOME_ENV))?;
    let config = AddrBookConfig::load(&paths.config_dir)?;
    let data_file = resolve_data_file(&paths, &config, env_path(FILE_ENV));
    debug!(
        "config dir {}, data file {}",
        paths.config_dir.display(),
        data_file.display()
    );

    let api = AddressBookApi::open(FileStore::new(data_file.clone()))?;
    Ok(AddrBookContext { api, data_file })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn home_override_is_used_for_both_dirs() {
        let temp = TempDir::new().unwrap();
        let paths = resolve_paths(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(paths.config_dir, temp.path());
        assert_eq!(paths.data_dir, temp.path());
    }

    #[test]
    fn data_file_from_config() {
        let temp = TempDir::new().unwrap();
        let paths = resolve_paths(Some(temp.path().to_path_buf())).unwrap();
        let config = AddrBookConfig {
            data_file: "friends.json".to_string(),
        };
        assert_eq!(
            resolve_data_file(&paths, &config, None),
            temp.path().join("friends.json")
        );
    }

    #[test]
    fn file_override_wins() {
        let temp = TempDir::new().unwrap();
        let paths = resolve_paths(Some(temp.path().to_path_buf())).unwrap();
        let explicit = temp.path().join("explicit.json");
        assert_eq!(
            resolve_data_file(&paths, &AddrBookConfig::default(), Some(explicit.clone())),
            explicit
        );
    }
}
