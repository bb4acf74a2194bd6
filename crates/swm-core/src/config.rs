//! Runtime configuration.
//!
//! Configuration is resolved once at startup: the swm home directory
//! (from `SWM_HOME` or `~/.swm`), plus an optional `config.toml` inside it
//! overriding the registry filename and the default log filter. A missing
//! config file is normal; a malformed one is an error.

use crate::paths::{CONFIG_FILE, REGISTRY_FILE, try_swm_home};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither `SWM_HOME` nor the user's home directory could be resolved.
    #[error("Could not determine home directory. Set SWM_HOME to override.")]
    HomeNotFound,

    /// The config file exists but could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file exists but is not valid TOML.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    registry: RegistrySection,
    #[serde(default)]
    log: LogSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RegistrySection {
    file: String,
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            file: REGISTRY_FILE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct LogSection {
    filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The swm home directory.
    pub home: PathBuf,
    /// Full path of the installed-software registry document.
    pub registry_path: PathBuf,
    /// Default tracing filter (overridden by `RUST_LOG` at runtime).
    pub log_filter: String,
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HomeNotFound`] if no home directory can be
    /// resolved, or a read/parse error for a malformed config file.
    pub fn load() -> Result<Self, ConfigError> {
        let home = try_swm_home().ok_or(ConfigError::HomeNotFound)?;
        Self::load_from(&home)
    }

    /// Resolve configuration against an explicit home directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config.toml` exists under `home` but
    /// cannot be read or parsed.
    pub fn load_from(home: &Path) -> Result<Self, ConfigError> {
        let config_path = home.join(CONFIG_FILE);
        let file: ConfigFile = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            ConfigFile::default()
        };

        Ok(Self {
            registry_path: home.join(&file.registry.file),
            log_filter: file.log.filter,
            home: home.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_when_config_file_is_absent() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(dir.path()).unwrap();

        assert_eq!(config.registry_path, dir.path().join("registry.json"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn config_file_overrides_registry_filename_and_filter() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[registry]\nfile = \"state.json\"\n\n[log]\nfilter = \"debug\"\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.registry_path, dir.path().join("state.json"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "registry = not toml {").unwrap();

        assert!(matches!(
            Config::load_from(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
