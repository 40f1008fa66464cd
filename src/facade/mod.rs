//! Read/write entry points
//!
//! [`Tagger`] wires the pieces together: validate arguments, classify the
//! path once, then hand the target to the traversal with a read or write leaf.
//! The free functions [`read`] and [`write`] use a default `Tagger` (ID3
//! codec, global rayon pool).
//!
//! [`read_value`] and [`write_value`] accept loosely-typed JSON arguments and
//! reject malformed ones with `InvalidArgument` before touching the disk.
//!
//! # Examples
//!
//! ```no_run
//! use music_tag::{Options, TagSet};
//!
//! let song = music_tag::read("song.mp3", None).unwrap();
//! println!("{:?}", song);
//!
//! let top_level = music_tag::read("Music/", Some(Options { recursive: false })).unwrap();
//! for result in top_level.as_slice() {
//!     println!("{}: {} tags", result.path.display(), result.data.len());
//! }
//!
//! let mut tags = TagSet::new();
//! tags.insert("year", "1999");
//! music_tag::write("Music/", &tags, None).unwrap();
//! ```

mod request;

pub use request::{parse_tags, read_value, write_value};

use rayon::{ThreadPool, ThreadPoolBuilder};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::codec::{Id3Codec, TagCodec};
use crate::discovery::classify;
use crate::error::TagError;
use crate::traverse::{self, Leaf};
use crate::types::{Options, Outcome, TagSet};

/// Configured read/write engine
///
/// Cheap to clone; clones share the codec and the thread pool.
#[derive(Clone)]
pub struct Tagger {
    codec: Arc<dyn TagCodec>,
    pool: Option<Arc<ThreadPool>>,
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Tagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tagger")
            .field("threads", &self.pool.as_ref().map(|p| p.current_num_threads()))
            .finish_non_exhaustive()
    }
}

impl Tagger {
    /// ID3 codec on the global rayon pool
    #[must_use]
    pub fn new() -> Self {
        Self::with_codec(Arc::new(Id3Codec::default()))
    }

    #[must_use]
    pub fn with_codec(codec: Arc<dyn TagCodec>) -> Self {
        Self { codec, pool: None }
    }

    /// Run traversals on a dedicated pool of `threads` workers
    ///
    /// # Errors
    /// Returns `TagError::InvalidArgument` if `threads` is zero or the pool
    /// cannot be built.
    pub fn with_threads(mut self, threads: usize) -> Result<Self, TagError> {
        if threads == 0 {
            return Err(TagError::invalid_argument("threads", threads));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("music-tag-{i}"))
            .build()
            .map_err(|e| TagError::InvalidArgument(format!("Failed to build thread pool: {e}")))?;
        self.pool = Some(Arc::new(pool));
        Ok(self)
    }

    /// Read the tags of a file, or of every audio file under a directory
    ///
    /// # Errors
    /// Returns `TagError` for an invalid path, a path that cannot be
    /// classified, or the first failing file.
    pub fn read(&self, path: impl AsRef<Path>, options: Option<Options>) -> Result<Outcome, TagError> {
        let path = path.as_ref();
        validate_path(path)?;
        self.execute(path, options.unwrap_or_default(), Leaf::Read)
    }

    /// Merge `tags` into a file, or into every audio file under a directory
    ///
    /// Each result carries the complete tag set of its file after the write.
    /// Writes are not transactional: when a directory write fails, files
    /// written before the failure keep their new tags.
    ///
    /// # Errors
    /// Returns `TagError` for an invalid path, a path that cannot be
    /// classified, or the first failing file.
    pub fn write(
        &self,
        path: impl AsRef<Path>,
        tags: &TagSet,
        options: Option<Options>,
    ) -> Result<Outcome, TagError> {
        let path = path.as_ref();
        validate_path(path)?;
        self.execute(path, options.unwrap_or_default(), Leaf::Write(tags))
    }

    fn execute(&self, path: &Path, options: Options, leaf: Leaf<'_>) -> Result<Outcome, TagError> {
        debug!(path = %path.display(), op = leaf.name(), recursive = options.recursive, "starting");

        let run = || {
            let target = classify(path)?;
            traverse::run(self.codec.as_ref(), &target, options, leaf)
        };

        let outcome = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        if let Err(e) = &outcome {
            warn!(path = %path.display(), op = leaf.name(), error = %e, "operation failed");
        }
        outcome
    }
}

fn validate_path(path: &Path) -> Result<(), TagError> {
    if path.as_os_str().is_empty() {
        return Err(TagError::invalid_argument("path", path.display()));
    }
    Ok(())
}

/// Read with the default [`Tagger`]
///
/// # Errors
/// See [`Tagger::read`].
pub fn read(path: impl AsRef<Path>, options: Option<Options>) -> Result<Outcome, TagError> {
    Tagger::new().read(path, options)
}

/// Write with the default [`Tagger`]
///
/// # Errors
/// See [`Tagger::write`].
pub fn write(
    path: impl AsRef<Path>,
    tags: &TagSet,
    options: Option<Options>,
) -> Result<Outcome, TagError> {
    Tagger::new().write(path, tags, options)
}
