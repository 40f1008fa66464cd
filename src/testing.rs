//! Testing utilities for music-tag
//!
//! This module provides fixtures for writing tests: an [`AudioTree`] wrapper
//! around a temporary directory for building audio file layouts, and a
//! [`MemoryCodec`] that keeps tags in memory and can be told to fail or stall
//! on specific files.
//!
//! Only available when compiled with `cfg(test)`.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

use crate::codec::{CodecError, TagCodec};
use crate::discovery::is_audio_file;
use crate::types::TagSet;

/// Bytes of an MPEG frame header followed by padding; no ID3 tag.
const FAKE_MP3: &[u8] = &[0xFF, 0xFB, 0x90, 0x64, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// Build a `TagSet` from literal pairs
#[must_use]
pub fn tag_set(pairs: &[(&str, &str)]) -> TagSet {
    pairs.iter().copied().collect()
}

/// Write a minimal, valid PCM WAV file with a handful of silent samples
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_wav(path: &Path) {
    let data = [0u8; 8];
    let fmt_len: u32 = 16;
    let riff_len = 4 + (8 + fmt_len) + (8 + data.len() as u32);

    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&riff_len.to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&fmt_len.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&8000u32.to_le_bytes());
    bytes.extend_from_slice(&16000u32.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&data);

    fs::write(path, bytes).expect("Failed to write wav fixture");
}

/// Temporary directory for building audio trees, removed on drop
///
/// The root is canonicalized up front so paths handed out by the tree compare
/// equal to the resolved paths the library reports.
pub struct AudioTree {
    _dir: TempDir,
    root: PathBuf,
}

impl AudioTree {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = fs::canonicalize(dir.path()).expect("Failed to canonicalize temp dir");
        Self { _dir: dir, root }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Create a sub-directory (and its parents) relative to the root
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Create an untagged audio file relative to the root
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn audio_file(&self, relative: &str) -> PathBuf {
        self.file_with(relative, FAKE_MP3)
    }

    /// Create a non-audio file relative to the root
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn text_file(&self, relative: &str) -> PathBuf {
        self.file_with(relative, b"test content")
    }

    fn file_with(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Lay out the reference tree:
    ///
    /// ```text
    /// bad.mp3  test1.mp3  test2.mp3  notes.txt
    /// dirA/test3.mp3  dirA/test4.mp3
    /// dirB/test5.mp3  dirB/test6.mp3
    /// ```
    pub fn reference_layout(&self) {
        for name in [
            "bad.mp3",
            "test1.mp3",
            "test2.mp3",
            "dirA/test3.mp3",
            "dirA/test4.mp3",
            "dirB/test5.mp3",
            "dirB/test6.mp3",
        ] {
            self.audio_file(name);
        }
        self.text_file("notes.txt");
    }
}

impl Default for AudioTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Expected pre-order, listing-order sequence of audio files under `dir`,
/// computed straight from `read_dir` so tests do not assume any particular
/// directory ordering.
///
/// # Panics
/// Panics if the directory cannot be listed.
#[must_use]
pub fn expected_order(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).expect("Failed to list directory") {
        let entry = entry.expect("Failed to read entry");
        let file_type = entry.file_type().expect("Failed to read file type");
        let path = entry.path();
        if file_type.is_file() && is_audio_file(&path) {
            out.push(path);
        } else if file_type.is_dir() && recursive {
            out.extend(expected_order(&path, recursive));
        }
    }
    out
}

/// Whether permission bits are enforced for this process (false when root)
///
/// # Panics
/// Panics if the check file cannot be created.
#[cfg(unix)]
#[must_use]
pub fn permissions_enforced() -> bool {
    use std::os::unix::fs::PermissionsExt;

    let tree = AudioTree::new();
    let check = tree.text_file("mode-check.txt");
    fs::set_permissions(&check, fs::Permissions::from_mode(0o000)).expect("Failed to chmod");
    let enforced = fs::read(&check).is_err();
    fs::set_permissions(&check, fs::Permissions::from_mode(0o644)).expect("Failed to chmod");
    enforced
}

/// Set unix permission bits on `path`
///
/// # Panics
/// Panics if the permissions cannot be changed.
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).expect("Failed to chmod");
}

/// In-memory codec with failure and delay injection
#[derive(Default)]
pub struct MemoryCodec {
    store: Mutex<HashMap<PathBuf, TagSet>>,
    failing: HashSet<PathBuf>,
    denied: HashSet<PathBuf>,
    delays: HashMap<PathBuf, Duration>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MemoryCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the stored tags for `path`
    ///
    /// # Panics
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn with_tags(self, path: impl Into<PathBuf>, tags: TagSet) -> Self {
        self.store.lock().unwrap().insert(path.into(), tags);
        self
    }

    /// Make every operation on `path` fail
    #[must_use]
    pub fn failing_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Make every operation on `path` fail the way an unreadable file does
    #[must_use]
    pub fn denying(mut self, path: impl Into<PathBuf>) -> Self {
        self.denied.insert(path.into());
        self
    }

    /// Make every operation on `path` sleep first
    #[must_use]
    pub fn delayed(mut self, path: impl Into<PathBuf>, delay: Duration) -> Self {
        self.delays.insert(path.into(), delay);
        self
    }

    /// Paths the codec was called with, in call order
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }

    /// Current stored tags for `path`
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn stored(&self, path: &Path) -> Option<TagSet> {
        self.store.lock().unwrap().get(path).cloned()
    }

    fn enter(&self, path: &Path) -> Result<(), CodecError> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        if let Some(delay) = self.delays.get(path) {
            std::thread::sleep(*delay);
        }
        if self.failing.contains(path) {
            return Err(CodecError::Malformed(format!("injected failure: {}", path.display())));
        }
        if self.denied.contains(path) {
            return Err(CodecError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied)));
        }
        Ok(())
    }
}

impl TagCodec for MemoryCodec {
    fn decode(&self, path: &Path) -> Result<TagSet, CodecError> {
        self.enter(path)?;
        self.store
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or(CodecError::NoTag)
    }

    fn encode(&self, path: &Path, tags: &TagSet) -> Result<TagSet, CodecError> {
        self.enter(path)?;
        let mut store = self.store.lock().unwrap();
        let entry = store.entry(path.to_path_buf()).or_default();
        entry.merge(tags);
        Ok(entry.clone())
    }
}
