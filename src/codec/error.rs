use thiserror::Error;

/// Errors produced by a tag codec
#[derive(Debug, Error)]
pub enum CodecError {
    /// The file carries no tag container at all
    ///
    /// Readers treat this as an empty tag set; it is never surfaced to callers
    /// of a read.
    #[error("No tag container present")]
    NoTag,

    /// Reading or writing the file's bytes failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A tag container exists but could not be decoded
    #[error("Malformed tag: {0}")]
    Malformed(String),

    /// The container uses a feature the codec cannot handle
    #[error("Unsupported tag feature: {0}")]
    Unsupported(String),
}

impl CodecError {
    #[must_use]
    pub const fn is_no_tag(&self) -> bool {
        matches!(self, Self::NoTag)
    }
}

impl From<id3::Error> for CodecError {
    fn from(err: id3::Error) -> Self {
        match err.kind {
            id3::ErrorKind::NoTag => Self::NoTag,
            id3::ErrorKind::Io(source) => Self::Io(source),
            id3::ErrorKind::UnsupportedFeature => Self::Unsupported(err.description),
            _ => Self::Malformed(err.description),
        }
    }
}
