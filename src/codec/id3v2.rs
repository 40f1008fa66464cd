//! ID3v2 codec built on the `id3` crate.
//!
//! MP3 and FLAC files carry the tag at the start of the file; WAV files carry
//! it in a RIFF chunk.

use id3::{Tag, Version};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::trace;

use super::{CodecError, TagCodec, frames};
use crate::types::TagSet;

/// ID3v2 revision used when writing
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Id3Version {
    V23,
    #[default]
    V24,
}

impl From<Id3Version> for Version {
    fn from(version: Id3Version) -> Self {
        match version {
            Id3Version::V23 => Self::Id3v23,
            Id3Version::V24 => Self::Id3v24,
        }
    }
}

impl std::str::FromStr for Id3Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v23" | "2.3" | "id3v23" => Ok(Self::V23),
            "v24" | "2.4" | "id3v24" => Ok(Self::V24),
            other => Err(format!("Unknown ID3 version '{other}'. Use 'v23' or 'v24'")),
        }
    }
}

impl std::fmt::Display for Id3Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V23 => f.write_str("v23"),
            Self::V24 => f.write_str("v24"),
        }
    }
}

/// Where the tag lives inside the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    /// Tag prepended to the audio stream
    Prefixed,
    /// Tag stored in a RIFF chunk
    Wav,
}

impl Container {
    fn of(path: &Path) -> Self {
        let is_wav = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));

        if is_wav { Self::Wav } else { Self::Prefixed }
    }
}

/// Reads and writes ID3v2 tags
#[derive(Debug, Clone, Copy, Default)]
pub struct Id3Codec {
    version: Id3Version,
}

impl Id3Codec {
    #[must_use]
    pub const fn new(version: Id3Version) -> Self {
        Self { version }
    }

    #[must_use]
    pub const fn version(&self) -> Id3Version {
        self.version
    }

    fn read_tag(path: &Path) -> Result<Tag, CodecError> {
        let tag = match Container::of(path) {
            Container::Prefixed => Tag::read_from_path(path)?,
            Container::Wav => Tag::read_from_wav_path(path)?,
        };
        Ok(tag)
    }

    fn write_tag(&self, tag: &Tag, path: &Path) -> Result<(), CodecError> {
        let version = Version::from(self.version);
        match Container::of(path) {
            Container::Prefixed => tag.write_to_path(path, version)?,
            Container::Wav => tag.write_to_wav_path(path, version)?,
        }
        Ok(())
    }
}

impl TagCodec for Id3Codec {
    fn decode(&self, path: &Path) -> Result<TagSet, CodecError> {
        let tag = Self::read_tag(path)?;
        Ok(frames::to_tag_set(&tag))
    }

    fn encode(&self, path: &Path, tags: &TagSet) -> Result<TagSet, CodecError> {
        let mut tag = match Self::read_tag(path) {
            Ok(tag) => tag,
            Err(CodecError::NoTag) => {
                trace!(path = %path.display(), "no existing tag, starting fresh");
                Tag::new()
            }
            Err(e) => return Err(e),
        };

        frames::apply(&mut tag, tags)?;
        self.write_tag(&tag, path)?;

        Ok(frames::to_tag_set(&tag))
    }
}
