//! Path classification and directory listing
//!
//! - [`classify`] resolves a caller-supplied path once and decides whether it
//!   is a file or a directory.
//! - [`list_children`] lists the direct children of a directory that the
//!   traversal should visit, in the order the filesystem reports them.

mod classify;
mod walk;

pub use classify::classify;
pub use walk::list_children;

use std::path::Path;

/// Extensions recognized as audio files, compared case-insensitively
pub const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "flac", "wav"];

/// Whether `path` carries one of the [`AUDIO_EXTENSIONS`]
#[must_use]
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| AUDIO_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}
