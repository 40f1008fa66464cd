//! music-tag - Read and write audio file tags, one file or a whole folder at a time
//!
//! A path is classified as a file or a directory. Files are handed to a tag
//! codec; directories are walked, every child is processed in parallel and the
//! results are flattened back into listing order. Writes merge the given tags
//! into what each file already carries.
//!
//! ```no_run
//! use music_tag::{Options, TagSet};
//!
//! let mut tags = TagSet::new();
//! tags.insert("album", "Live at the BBC");
//! let written = music_tag::write("Music/BBC", &tags, Some(Options { recursive: false }))?;
//! println!("updated {} file(s)", written.len());
//! # Ok::<(), music_tag::TagError>(())
//! ```

use thiserror::Error;

pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod facade;
pub mod logging;
pub mod output;
pub mod traverse;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use codec::{CodecError, Id3Codec, Id3Version, TagCodec};
pub use error::{ErrorKind, TagError};
pub use facade::{Tagger, read, read_value, write, write_value};
pub use types::{Options, OperationResult, Outcome, PartialOptions, ResultList, TagSet, Target, TargetKind};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MusicTagError {
    /// Reading or writing tags failed
    #[error("{0}")]
    TagError(#[from] TagError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON input or output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MusicTagError {
    /// Process exit code for this error
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::TagError(e) if e.kind() == ErrorKind::InvalidArgument => 2,
            Self::InvalidInput(_) => 2,
            _ => 1,
        }
    }
}
