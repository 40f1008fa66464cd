//! Error taxonomy of the read/write pipeline
//!
//! Every failure of [`crate::read`] or [`crate::write`] is a [`TagError`].
//! Directory-level failures arrive wrapped in [`TagError::AggregateFailure`],
//! one layer per directory between the target and the failing file; the kind
//! reported by [`TagError::kind`] is always that of the innermost error.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::codec::CodecError;

/// Errors produced while reading or writing tags
#[derive(Debug, Error)]
pub enum TagError {
    /// Malformed path, options or tags, detected before any I/O
    #[error("{0}")]
    InvalidArgument(String),

    /// The path does not exist
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The filesystem refused access to the path
    #[error("Permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path exists but is neither a regular file nor a directory
    #[error("Unsupported path kind: {}", .0.display())]
    UnsupportedPathKind(PathBuf),

    /// A file target whose extension is not a recognized audio extension
    #[error("Not an audio file: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    /// Tag decoding or encoding failed
    #[error("Tag codec error on {}: {source}", path.display())]
    Codec {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// Any other filesystem failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A child of `directory` failed, aborting the whole directory
    #[error("Failed while processing {} in {}: {source}", child.display(), directory.display())]
    AggregateFailure {
        directory: PathBuf,
        child: PathBuf,
        #[source]
        source: Box<TagError>,
    },
}

/// Kind of a [`TagError`], looking through aggregate wrappers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    PermissionDenied,
    UnsupportedPathKind,
    UnsupportedFileType,
    Codec,
    Io,
}

impl TagError {
    pub(crate) fn invalid_argument(what: &str, value: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("Invalid {what} argument: {value}"))
    }

    /// Classify an `io::Error` raised while touching `path`
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
                source,
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    pub(crate) fn codec(path: &Path, source: CodecError) -> Self {
        Self::Codec {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn aggregate(directory: &Path, child: &Path, source: Self) -> Self {
        Self::AggregateFailure {
            directory: directory.to_path_buf(),
            child: child.to_path_buf(),
            source: Box::new(source),
        }
    }

    /// The innermost error, skipping every aggregate wrapper
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::AggregateFailure { source, .. } = current {
            current = source;
        }
        current
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.root_cause() {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::UnsupportedPathKind(_) => ErrorKind::UnsupportedPathKind,
            Self::UnsupportedFileType(_) => ErrorKind::UnsupportedFileType,
            Self::Codec { .. } => ErrorKind::Codec,
            Self::Io { .. } | Self::AggregateFailure { .. } => ErrorKind::Io,
        }
    }

    #[must_use]
    pub const fn is_aggregate(&self) -> bool {
        matches!(self, Self::AggregateFailure { .. })
    }

    /// Path of the file or directory the innermost error is about
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self.root_cause() {
            Self::InvalidArgument(_) => None,
            Self::NotFound(path)
            | Self::UnsupportedPathKind(path)
            | Self::UnsupportedFileType(path)
            | Self::PermissionDenied { path, .. }
            | Self::Codec { path, .. }
            | Self::Io { path, .. } => Some(path),
            Self::AggregateFailure { child, .. } => Some(child),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
