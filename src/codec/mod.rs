//! Tag codec adapter
//!
//! The traversal core only ever talks to a [`TagCodec`]: decode a file's tags
//! into a [`TagSet`], or merge a [`TagSet`] into a file and report the result.
//! [`Id3Codec`] is the concrete implementation used by default.
//!
//! A missing tag container is reported as [`CodecError::NoTag`]; the leaf read
//! turns that one variant into an empty tag set, every other error propagates.

pub mod error;
mod frames;
mod id3v2;

pub use self::error::CodecError;
pub use self::id3v2::{Id3Codec, Id3Version};

use crate::types::TagSet;
use std::path::Path;

/// Decoder/encoder for the tags embedded in an audio file
///
/// Implementations are shared across the worker threads of a traversal, so
/// they must be `Send + Sync`.
pub trait TagCodec: Send + Sync {
    /// Decode every tag stored in `path`.
    ///
    /// # Errors
    /// Returns [`CodecError::NoTag`] when the file has no tag container and
    /// another variant for any other failure.
    fn decode(&self, path: &Path) -> Result<TagSet, CodecError>;

    /// Merge `tags` into the tags already stored in `path` and write them back.
    ///
    /// Returns the complete tag set as written.
    ///
    /// # Errors
    /// Returns `CodecError` if the existing tags cannot be read (other than
    /// being absent) or the file cannot be written.
    fn encode(&self, path: &Path, tags: &TagSet) -> Result<TagSet, CodecError>;
}
