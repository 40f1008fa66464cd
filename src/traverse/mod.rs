//! Recursive traversal and aggregation
//!
//! A file target runs its [`Leaf`] operation directly. A directory target is
//! listed, every child is handled in parallel on the rayon pool (files run the
//! leaf, sub-directories recurse), and the per-child results are flattened
//! back in listing order: a sub-directory's files appear exactly where the
//! sub-directory itself was listed.
//!
//! The parallel collect keeps each child's output at its index, so the final
//! order never depends on which child finishes first. The first child error
//! aborts its directory; results already produced by siblings are dropped.
//! Siblings already running are not cancelled, so a failed write may leave
//! some files updated.

mod leaf;

pub use leaf::Leaf;

use rayon::prelude::*;
use std::path::Path;
use tracing::debug;

use crate::codec::TagCodec;
use crate::discovery::{is_audio_file, list_children};
use crate::error::TagError;
use crate::types::{Options, Outcome, ResultList, Target, TargetKind};

/// Run `leaf` against a classified target
///
/// # Errors
/// Returns `UnsupportedFileType` for a file target without an audio
/// extension, the leaf's own error for a file, or the first failure inside a
/// directory wrapped in `AggregateFailure`.
pub fn run(
    codec: &dyn TagCodec,
    target: &Target,
    options: Options,
    leaf: Leaf<'_>,
) -> Result<Outcome, TagError> {
    match target.kind() {
        TargetKind::File => {
            if !is_audio_file(target.resolved()) {
                return Err(TagError::UnsupportedFileType(target.resolved().to_path_buf()));
            }
            leaf.apply(codec, target.resolved()).map(Outcome::Single)
        }
        TargetKind::Directory => {
            let results = run_directory(codec, target.resolved(), options, leaf)?;
            debug!(
                dir = %target.resolved().display(),
                files = results.len(),
                op = leaf.name(),
                "directory done"
            );
            Ok(Outcome::List(results))
        }
    }
}

fn run_directory(
    codec: &dyn TagCodec,
    dir: &Path,
    options: Options,
    leaf: Leaf<'_>,
) -> Result<ResultList, TagError> {
    let children = list_children(dir, options.recursive)?;

    let nested: Vec<ResultList> = children
        .par_iter()
        .map(|child| {
            let result = match child.kind() {
                TargetKind::File => leaf.apply(codec, child.resolved()).map(|r| vec![r]),
                TargetKind::Directory => run_directory(codec, child.resolved(), options, leaf),
            };
            result.map_err(|source| {
                debug!(
                    dir = %dir.display(),
                    child = %child.resolved().display(),
                    error = %source,
                    "aborting directory"
                );
                TagError::aggregate(dir, child.resolved(), source)
            })
        })
        .collect::<Result<_, _>>()?;

    Ok(nested.into_iter().flatten().collect())
}
