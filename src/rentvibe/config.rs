use crate::auth::DEFAULT_ITERATIONS;
use crate::catalog_store::DEFAULT_RELATED_LIMIT;
use crate::error::{RentError, Result};
use crate::sort::SortOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for rentvibe, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RentConfig {
    /// JSON catalog to search instead of the built-in listings
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// How many related listings a property page shows
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,

    /// PBKDF2 rounds for newly hashed passwords
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,

    #[serde(default)]
    pub default_sort: SortOrder,
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

fn default_hash_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

impl Default for RentConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            related_limit: DEFAULT_RELATED_LIMIT,
            hash_iterations: DEFAULT_ITERATIONS,
            default_sort: SortOrder::default(),
        }
    }
}

impl RentConfig {
    pub const KEYS: [&'static str; 4] = ["catalog", "related-limit", "hash-iterations", "sort"];

    /// Reads `config.json` from `data_dir`. A data dir without one yields
    /// the defaults; a malformed file is an error.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        match fs::read_to_string(data_dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(RentError::Io(e)),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, data_dir: P) -> Result<()> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;
        fs::write(
            data_dir.join(CONFIG_FILENAME),
            serde_json::to_string_pretty(self)?,
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog" => Some(
                self.catalog_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in)".to_string()),
            ),
            "related-limit" => Some(self.related_limit.to_string()),
            "hash-iterations" => Some(self.hash_iterations.to_string()),
            "sort" => Some(self.default_sort.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog" => {
                let value = value.trim();
                self.catalog_path = if value.is_empty() || value == "builtin" {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "related-limit" => {
                self.related_limit = value.trim().parse().map_err(|_| {
                    RentError::Config(format!("related-limit must be a number, got '{}'", value))
                })?;
            }
            "hash-iterations" => {
                let n: u32 = value.trim().parse().map_err(|_| {
                    RentError::Config(format!("hash-iterations must be a number, got '{}'", value))
                })?;
                if n == 0 {
                    return Err(RentError::Config(
                        "hash-iterations must be at least 1".to_string(),
                    ));
                }
                self.hash_iterations = n;
            }
            "sort" => {
                self.default_sort = value.parse().map_err(RentError::Config)?;
            }
            other => return Err(RentError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RentConfig::default();
        assert_eq!(config.related_limit, 3);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.default_sort, SortOrder::Newest);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = RentConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, RentConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = RentConfig::default();
        config.set("related-limit", "5").unwrap();
        config.set("sort", "price-high").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = RentConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.related_limit, 5);
        assert_eq!(loaded.default_sort, SortOrder::PriceHighToLow);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"related_limit": 1}"#).unwrap();
        let config = RentConfig::load(dir.path()).unwrap();
        assert_eq!(config.related_limit, 1);
        assert_eq!(config.hash_iterations, DEFAULT_ITERATIONS);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{related").unwrap();
        assert!(matches!(
            RentConfig::load(dir.path()),
            Err(RentError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = RentConfig::default();
        assert!(config.set("related-limit", "many").is_err());
        assert!(config.set("hash-iterations", "0").is_err());
        assert!(config.set("sort", "popular").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, RentConfig::default());
    }

    #[test]
    fn test_catalog_key() {
        let mut config = RentConfig::default();
        config.set("catalog", "/tmp/listings.json").unwrap();
        assert_eq!(config.get("catalog").unwrap(), "/tmp/listings.json");
        config.set("catalog", "builtin").unwrap();
        assert_eq!(config.catalog_path, None);
    }
}
