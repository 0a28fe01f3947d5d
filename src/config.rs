//! Configuration management for the credential store
//!
//! Settings are layered, lowest precedence first: built-in defaults, an
//! optional config file, `CREDSTORE_*` environment variables, and finally
//! command line overrides.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Store file used when nothing else is configured, relative to the working directory
pub const DEFAULT_STORE_PATH: &str = "users.json";

/// Base name of the optional config file (`credstore.toml`, `credstore.json`, ...)
pub const DEFAULT_CONFIG_NAME: &str = "credstore";

/// Environment prefix, e.g. `CREDSTORE_STORE_PATH`
pub const ENV_PREFIX: &str = "CREDSTORE";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    /// Location of the JSON user store
    pub store_path: String,
}

impl StoreConfig {
    /// Load configuration from the named config file with environment and CLI overrides
    pub fn load(config_name: &str, store_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::build(config_name, store_path, Environment::with_prefix(ENV_PREFIX))
    }

    fn build(
        config_name: &str,
        store_path: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("store_path", DEFAULT_STORE_PATH)?
            .add_source(File::with_name(config_name).required(false))
            .add_source(env);

        if let Some(path) = store_path {
            builder = builder.set_override("store_path", path.to_string_lossy().to_string())?;
        }

        let config: StoreConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.store_path.trim().is_empty() {
            return Err(ConfigError::Message("store_path cannot be empty".into()));
        }
        Ok(())
    }

    /// Get store path as PathBuf
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const UNSET_PREFIX: &str = "CREDSTORE_UNIT_TEST_UNSET";

    fn build(config_name: &str, store_path: Option<&Path>) -> Result<StoreConfig, ConfigError> {
        StoreConfig::build(config_name, store_path, Environment::with_prefix(UNSET_PREFIX))
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let config = build(missing.to_str().unwrap(), None).unwrap();
        assert_eq!(config.store_path(), PathBuf::from("users.json"));
    }

    #[test]
    fn test_file_then_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("credstore.toml");
        fs::write(&file, "store_path = \"from-file.json\"\n").unwrap();

        let from_file = build(file.to_str().unwrap(), None).unwrap();
        assert_eq!(from_file.store_path, "from-file.json");

        let overridden = build(file.to_str().unwrap(), Some(Path::new("cli.json"))).unwrap();
        assert_eq!(overridden.store_path, "cli.json");
    }

    #[test]
    fn test_empty_store_path_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        assert!(build(missing.to_str().unwrap(), Some(Path::new(""))).is_err());
    }
}
