//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for music-tag using the `clap` crate.
//!
//! # Commands
//!
//! - **read**: Print the tags of a file, or of every audio file under a directory
//! - **write**: Merge tags into a file, or into every audio file under a directory
//! - **config**: Get and set persistent defaults
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use music_tag::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["music-tag", "write", "Music/", "-t", "year=1999"]);
//! if let Commands::Write { tags, .. } = &cli.command {
//!     assert_eq!(tags, &[("year".to_string(), "1999".to_string())]);
//! }
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PathFormat;

/// Parse a `KEY=VALUE` tag assignment
///
/// # Errors
/// Returns a message when there is no `=` or the key is empty.
pub fn parse_tag_pair(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid tag '{s}'. Use KEY=VALUE"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Invalid tag '{s}'. The key must not be empty"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., recursive=false)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., threads)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "music-tag")]
#[command(about = "Read and write audio file tags", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log traversal decisions to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Display absolute paths (overrides config)
    #[arg(long = "absolute", global = true, conflicts_with = "relative")]
    pub absolute: bool,

    /// Display relative paths (overrides config)
    #[arg(long = "relative", global = true, conflicts_with = "absolute")]
    pub relative: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Read tags from a file or directory
    #[command(visible_alias = "r")]
    Read {
        /// Audio file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Only visit files directly inside the directory
        #[arg(long = "no-recursive")]
        no_recursive: bool,
    },

    /// Write tags to a file or directory
    #[command(visible_alias = "w")]
    Write {
        /// Audio file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Tag to set (repeatable)
        #[arg(short = 't', long = "tag", value_name = "KEY=VALUE", value_parser = parse_tag_pair)]
        tags: Vec<(String, String)>,

        /// Tags as a JSON object (applied before -t)
        #[arg(long = "tags-json", value_name = "JSON")]
        tags_json: Option<String>,

        /// Only visit files directly inside the directory
        #[arg(long = "no-recursive")]
        no_recursive: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    /// `Some(false)` when `--no-recursive` was given, `None` to use the configured default
    #[must_use]
    pub const fn recursive_override(&self) -> Option<bool> {
        match self {
            Self::Read { no_recursive, .. } | Self::Write { no_recursive, .. } if *no_recursive => {
                Some(false)
            }
            _ => None,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Helper method to get the path format override from global flags
    #[must_use]
    pub const fn get_path_format(&self) -> Option<PathFormat> {
        if self.absolute {
            Some(PathFormat::Absolute)
        } else if self.relative {
            Some(PathFormat::Relative)
        } else {
            None
        }
    }
}
