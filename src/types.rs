//! Data model shared by every layer of the crate
//!
//! # Types
//!
//! - **`TagSet`**: ordered tag-name to tag-value mapping, open-ended
//! - **`Options`** / **`PartialOptions`**: per-call traversal options and the
//!   caller-supplied shape that is merged over the defaults
//! - **`Target`**: a classified, resolved path (file or directory)
//! - **`OperationResult`**: the outcome of one leaf read or write
//! - **`Outcome`**: what the facade returns, one result for a file or the
//!   flattened result list for a directory
//!
//! All of these are plain values. Nothing here touches the filesystem.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::{Path, PathBuf};

/// Ordered mapping from tag name to tag value.
///
/// Keys are kept sorted so two sets holding the same entries compare and
/// print identically regardless of the order they were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeMap<String, String>);

impl TagSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or overwrite a single entry, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Overlay `other` on top of `self`.
    ///
    /// Entries of `other` are added or replace the value stored under the same
    /// key; keys `other` does not mention are left untouched.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Non-mutating form of [`TagSet::merge`]
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.merge(other);
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for TagSet {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Traversal options, fixed for the whole of one top-level call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Descend into sub-directories when the target is a directory
    pub recursive: bool,
}

impl Options {
    pub const DEFAULT: Self = Self { recursive: true };
}

impl Default for Options {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Caller-supplied options; every field is optional and unknown keys are rejected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialOptions {
    #[serde(default)]
    pub recursive: Option<bool>,
}

impl PartialOptions {
    /// Fill in every unset field from `base`
    #[must_use]
    pub fn merge_over(self, base: Options) -> Options {
        Options {
            recursive: self.recursive.unwrap_or(base.recursive),
        }
    }

    /// Shorthand for merging over [`Options::DEFAULT`]
    #[must_use]
    pub fn resolve(self) -> Options {
        self.merge_over(Options::DEFAULT)
    }
}

impl From<Options> for PartialOptions {
    fn from(options: Options) -> Self {
        Self {
            recursive: Some(options.recursive),
        }
    }
}

/// What a resolved path turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
}

/// A path that has been resolved and classified exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    requested: PathBuf,
    resolved: PathBuf,
    kind: TargetKind,
}

impl Target {
    pub(crate) fn new(requested: PathBuf, resolved: PathBuf, kind: TargetKind) -> Self {
        Self {
            requested,
            resolved,
            kind,
        }
    }

    /// The path as the caller (or the directory listing) spelled it
    #[must_use]
    pub fn requested(&self) -> &Path {
        &self.requested
    }

    /// Canonical absolute path
    #[must_use]
    pub fn resolved(&self) -> &Path {
        &self.resolved
    }

    #[must_use]
    pub const fn kind(&self) -> TargetKind {
        self.kind
    }

    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.kind == TargetKind::Directory
    }
}

/// Result of a single-file read or write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Fully resolved path of the file that was read or written
    pub path: PathBuf,
    /// Tags after the operation
    pub data: TagSet,
}

impl OperationResult {
    #[must_use]
    pub const fn new(path: PathBuf, data: TagSet) -> Self {
        Self { path, data }
    }
}

/// One result per audio file under a directory, in depth-first listing order
pub type ResultList = Vec<OperationResult>;

/// Return value of the facade: the shape follows the kind of the target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    Single(OperationResult),
    List(ResultList),
}

impl Outcome {
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Number of files the operation acted on
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(list) => list.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[OperationResult] {
        match self {
            Self::Single(result) => std::slice::from_ref(result),
            Self::List(list) => list,
        }
    }

    #[must_use]
    pub fn into_single(self) -> Option<OperationResult> {
        match self {
            Self::Single(result) => Some(result),
            Self::List(_) => None,
        }
    }

    #[must_use]
    pub fn into_list(self) -> Option<ResultList> {
        match self {
            Self::Single(_) => None,
            Self::List(list) => Some(list),
        }
    }

    /// Flatten either shape into a list
    #[must_use]
    pub fn into_vec(self) -> ResultList {
        match self {
            Self::Single(result) => vec![result],
            Self::List(list) => list,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
