use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::TagError;
use crate::types::{Target, TargetKind};

/// Resolve `raw` to a canonical absolute path and classify it.
///
/// Symbolic links and relative components are resolved, so `dir` and `dir/`
/// produce the same target.
///
/// # Errors
/// - `InvalidArgument` for an empty path
/// - `NotFound` if nothing exists at the path
/// - `PermissionDenied` if the path cannot be stat-ed
/// - `UnsupportedPathKind` for sockets, devices and the like
pub fn classify(raw: &Path) -> Result<Target, TagError> {
    if raw.as_os_str().is_empty() {
        return Err(TagError::invalid_argument("path", raw.display()));
    }

    let resolved = fs::canonicalize(raw).map_err(|e| TagError::from_io(raw, e))?;
    let metadata = fs::metadata(&resolved).map_err(|e| TagError::from_io(&resolved, e))?;

    let kind = if metadata.is_file() {
        TargetKind::File
    } else if metadata.is_dir() {
        TargetKind::Directory
    } else {
        return Err(TagError::UnsupportedPathKind(resolved));
    };

    debug!(requested = %raw.display(), resolved = %resolved.display(), ?kind, "classified target");
    Ok(Target::new(raw.to_path_buf(), resolved, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::AudioTree;
    use std::path::PathBuf;

    #[test]
    fn test_classify_file() {
        let tree = AudioTree::new();
        let path = tree.audio_file("a.mp3");

        let target = classify(&path).unwrap();
        assert_eq!(target.kind(), TargetKind::File);
        assert_eq!(target.requested(), path.as_path());
        assert!(target.resolved().is_absolute());
    }

    #[test]
    fn test_classify_directory_with_trailing_slash() {
        let tree = AudioTree::new();
        let plain = classify(tree.path()).unwrap();
        let slashed = classify(&PathBuf::from(format!("{}/", tree.path().display()))).unwrap();

        assert_eq!(plain.kind(), TargetKind::Directory);
        assert_eq!(plain.resolved(), slashed.resolved());
    }

    #[test]
    fn test_classify_resolves_relative_components() {
        let tree = AudioTree::new();
        tree.dir("sub");
        let roundabout = tree.path().join("sub").join("..");

        let target = classify(&roundabout).unwrap();
        assert_eq!(target.resolved(), classify(tree.path()).unwrap().resolved());
    }

    #[test]
    fn test_classify_missing_path() {
        let tree = AudioTree::new();
        let err = classify(&tree.path().join("non_existent")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_classify_empty_path() {
        let err = classify(Path::new("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_fifo_is_unsupported() {
        let tree = AudioTree::new();
        let fifo = tree.path().join("pipe.mp3");
        let status = std::process::Command::new("mkfifo").arg(&fifo).status();
        if !matches!(status, Ok(s) if s.success()) {
            return;
        }

        let err = classify(&fifo).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedPathKind);
    }
}
