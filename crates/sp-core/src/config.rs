//! Configuration types and parsing for sparkify.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no `--target` flag is given
pub const TARGET_ENV_VAR: &str = "SPARKIFY_TARGET";

/// Main project configuration from sparkify.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    #[serde(default = "default_name")]
    pub name: String,

    /// Warehouse connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Input dataset locations
    #[serde(default)]
    pub datasets: DatasetsConfig,

    /// Song file loading options
    #[serde(default)]
    pub songs: SongsConfig,

    /// Named target configurations (e.g., dev, prod)
    /// Each target can override the database settings
    #[serde(default)]
    pub targets: HashMap<String, TargetConfig>,
}

/// Target-specific configuration overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Database configuration override
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

/// Warehouse connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// DuckDB file path or `:memory:`
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Locations of the two input dataset families
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetsConfig {
    /// Root directory of song metadata files
    #[serde(default = "default_song_data")]
    pub song_data: String,

    /// Root directory of event log files
    #[serde(default = "default_log_data")]
    pub log_data: String,

    /// File extension (without the dot) of dataset files
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            song_data: default_song_data(),
            log_data: default_log_data(),
            extension: default_extension(),
        }
    }
}

/// Song file loading options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SongsConfig {
    /// Which records of a song file are loaded
    #[serde(default)]
    pub records: SongRecordPolicy,
}

/// Which records of a multi-line song file produce Song/Artist rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SongRecordPolicy {
    /// Only the first record of each file (one song per file)
    #[default]
    First,
    /// Every record of the file
    All,
}

impl std::fmt::Display for SongRecordPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SongRecordPolicy::First => write!(f, "first"),
            SongRecordPolicy::All => write!(f, "all"),
        }
    }
}

const CONFIG_FILE_NAMES: [&str; 2] = ["sparkify.yml", "sparkify.yaml"];

fn default_name() -> String {
    "sparkify".to_string()
}

fn default_db_path() -> String {
    ":memory:".to_string()
}

fn default_song_data() -> String {
    "data/song_data".to_string()
}

fn default_log_data() -> String {
    "data/log_data".to_string()
}

fn default_extension() -> String {
    "json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            database: DatabaseConfig::default(),
            datasets: DatasetsConfig::default(),
            songs: SongsConfig::default(),
            targets: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn parse(content: &str) -> CoreResult<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for sparkify.yml or sparkify.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => Err(CoreError::ConfigNotFound {
                path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
            }),
        }
    }

    /// Load configuration from a project directory, falling back to the
    /// defaults when the directory has no config file
    pub fn load_or_default(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!(
                    "No sparkify.yml in {}, using default configuration",
                    dir.display()
                );
                Ok(Self::default())
            }
        }
    }

    fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        if self.datasets.song_data.is_empty() || self.datasets.log_data.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "datasets.song_data and datasets.log_data must not be empty".to_string(),
            });
        }

        if self.datasets.extension.is_empty() || self.datasets.extension.starts_with('.') {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "datasets.extension must be a bare extension like 'json', got '{}'",
                    self.datasets.extension
                ),
            });
        }

        Ok(())
    }

    /// Get absolute song data root relative to a project root
    pub fn song_data_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.datasets.song_data)
    }

    /// Get absolute log data root relative to a project root
    pub fn log_data_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.datasets.log_data)
    }

    /// Get the list of available target names
    pub fn available_targets(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.targets.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get database configuration, optionally applying target overrides
    ///
    /// If target is specified and exists, uses target's database config.
    /// Otherwise, uses the base database config.
    pub fn get_database_config(&self, target: Option<&str>) -> CoreResult<DatabaseConfig> {
        match target {
            Some(name) => {
                let target_config =
                    self.targets
                        .get(name)
                        .ok_or_else(|| CoreError::ConfigInvalid {
                            message: format!(
                                "Target '{}' not found. Available targets: {}",
                                name,
                                self.available_targets().join(", ")
                            ),
                        })?;

                Ok(target_config
                    .database
                    .clone()
                    .unwrap_or_else(|| self.database.clone()))
            }
            None => Ok(self.database.clone()),
        }
    }

    /// Resolve target from CLI flag or SPARKIFY_TARGET environment variable
    ///
    /// Priority: CLI flag > SPARKIFY_TARGET env var > None
    pub fn resolve_target(cli_target: Option<&str>) -> Option<String> {
        cli_target
            .map(String::from)
            .or_else(|| std::env::var(TARGET_ENV_VAR).ok())
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
