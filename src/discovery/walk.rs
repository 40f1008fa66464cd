use std::fs;
use std::path::Path;
use tracing::debug;

use super::is_audio_file;
use crate::error::TagError;
use crate::types::{Target, TargetKind};

/// List the children of `dir` that a traversal should visit.
///
/// Entries come back in the order the filesystem lists them:
/// - regular files with an audio extension become `File` targets
/// - directories become `Directory` targets, only when `recursive`
/// - everything else is skipped
///
/// Symbolic links to audio files are included under their canonical path;
/// symbolic links to directories are never followed. Entries that cannot be
/// inspected are skipped here and left to fail later, if at all.
///
/// # Errors
/// Returns `NotFound`, `PermissionDenied` or `Io` if `dir` itself cannot be
/// listed.
pub fn list_children(dir: &Path, recursive: bool) -> Result<Vec<Target>, TagError> {
    let entries = fs::read_dir(dir).map_err(|e| TagError::from_io(dir, e))?;
    let mut out = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping entry with unknown type");
                continue;
            }
        };

        if file_type.is_file() {
            if is_audio_file(&path) {
                out.push(Target::new(path.clone(), path, TargetKind::File));
            }
        } else if file_type.is_dir() {
            if recursive {
                out.push(Target::new(path.clone(), path, TargetKind::Directory));
            }
        } else if file_type.is_symlink() && is_audio_file(&path) {
            match fs::canonicalize(&path) {
                Ok(resolved) if resolved.is_file() => {
                    out.push(Target::new(path, resolved, TargetKind::File));
                }
                Ok(_) => debug!(path = %path.display(), "symlink does not point at a file"),
                Err(e) => debug!(path = %path.display(), error = %e, "skipping dangling symlink"),
            }
        } else {
            debug!(path = %path.display(), "not following entry");
        }
    }

    debug!(dir = %dir.display(), children = out.len(), recursive, "listed directory");
    Ok(out)
}
