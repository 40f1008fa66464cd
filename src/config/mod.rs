//! Configuration module for music-tag
//!
//! Holds the defaults the command line falls back to when a flag is not
//! given. Configuration is stored in the user's config directory
//! (`~/.config/music-tag/config.toml` on Linux) and can be overridden with
//! `MUSIC_TAG_*` environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::Id3Version;
use crate::facade::Tagger;
use crate::types::Options;

/// Path display format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PathFormat {
    /// Display absolute paths
    #[default]
    Absolute,
    /// Display relative paths (relative to current directory)
    Relative,
}

impl std::str::FromStr for PathFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" => Ok(Self::Absolute),
            "relative" => Ok(Self::Relative),
            other => Err(format!("Unknown path format '{other}'. Use 'absolute' or 'relative'")),
        }
    }
}

impl std::fmt::Display for PathFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute => f.write_str("absolute"),
            Self::Relative => f.write_str("relative"),
        }
    }
}

fn default_recursive() -> bool {
    Options::DEFAULT.recursive
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MusicTagConfig {
    /// Descend into sub-directories unless told otherwise
    #[serde(default = "default_recursive")]
    pub recursive: bool,

    /// Size of a dedicated worker pool; the global pool is used when unset
    #[serde(default)]
    pub threads: Option<usize>,

    /// ID3v2 revision used when writing
    #[serde(default)]
    pub id3_version: Id3Version,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default format for displaying paths (absolute or relative)
    #[serde(default)]
    pub path_format: PathFormat,
}

impl Default for MusicTagConfig {
    fn default() -> Self {
        Self {
            recursive: default_recursive(),
            threads: None,
            id3_version: Id3Version::default(),
            quiet: false,
            path_format: PathFormat::default(),
        }
    }
}

impl MusicTagConfig {
    /// Keys accepted by `config get` / `config set`
    pub const KEYS: [&'static str; 5] = ["recursive", "threads", "id3_version", "quiet", "path_format"];

    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("music-tag").join("config.toml"))
    }

    /// Load configuration from the default location, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path` layered under `MUSIC_TAG_*` variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("MUSIC_TAG").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Update a single key from its textual value
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value that does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |expected: &str| {
            ConfigError::Message(format!("Invalid value for {key}: '{value}'. {expected}"))
        };

        match key {
            "recursive" => self.recursive = value.parse().map_err(|_| invalid("Use 'true' or 'false'"))?,
            "quiet" => self.quiet = value.parse().map_err(|_| invalid("Use 'true' or 'false'"))?,
            "threads" => {
                self.threads = match value {
                    "" | "auto" | "none" => None,
                    n => match n.parse::<usize>() {
                        Ok(0) | Err(_) => return Err(invalid("Use a positive number or 'auto'")),
                        Ok(n) => Some(n),
                    },
                }
            }
            "id3_version" => self.id3_version = value.parse().map_err(|e: String| invalid(&e))?,
            "path_format" => self.path_format = value.parse().map_err(|e: String| invalid(&e))?,
            _ => return Err(Self::unknown_key(key)),
        }
        Ok(())
    }

    /// Textual value of a single key
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "recursive" => self.recursive.to_string(),
            "quiet" => self.quiet.to_string(),
            "threads" => self.threads.map_or_else(|| "auto".to_string(), |n| n.to_string()),
            "id3_version" => self.id3_version.to_string(),
            "path_format" => self.path_format.to_string(),
            _ => return Err(Self::unknown_key(key)),
        };
        Ok(value)
    }

    fn unknown_key(key: &str) -> ConfigError {
        ConfigError::Message(format!(
            "Unknown configuration key: '{key}'. Available keys: {}",
            Self::KEYS.join(", ")
        ))
    }

    /// Options used when the command line does not override them
    #[must_use]
    pub const fn default_options(&self) -> Options {
        Options {
            recursive: self.recursive,
        }
    }

    /// Build the engine this configuration describes
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the worker pool cannot be built.
    pub fn tagger(&self) -> Result<Tagger, ConfigError> {
        let tagger = Tagger::with_codec(std::sync::Arc::new(crate::codec::Id3Codec::new(self.id3_version)));
        match self.threads {
            Some(threads) => tagger
                .with_threads(threads)
                .map_err(|e| ConfigError::Message(e.to_string())),
            None => Ok(tagger),
        }
    }
}
