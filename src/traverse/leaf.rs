use std::path::Path;
use tracing::trace;

use crate::codec::{CodecError, TagCodec};
use crate::error::TagError;
use crate::types::{OperationResult, TagSet};

/// Operation applied to every file a traversal reaches
#[derive(Debug, Clone, Copy)]
pub enum Leaf<'a> {
    Read,
    Write(&'a TagSet),
}

impl Leaf<'_> {
    /// Apply the operation to the single file at `path`
    ///
    /// A file without any tag container reads as an empty tag set.
    ///
    /// # Errors
    /// Returns `TagError::Codec` for every other codec failure.
    pub fn apply(self, codec: &dyn TagCodec, path: &Path) -> Result<OperationResult, TagError> {
        let data = match self {
            Self::Read => match codec.decode(path) {
                Ok(tags) => tags,
                Err(CodecError::NoTag) => {
                    trace!(path = %path.display(), "no tag container, reading as empty");
                    TagSet::new()
                }
                Err(e) => return Err(TagError::codec(path, e)),
            },
            Self::Write(tags) => codec
                .encode(path, tags)
                .map_err(|e| TagError::codec(path, e))?,
        };

        trace!(path = %path.display(), op = self.name(), entries = data.len(), "leaf done");
        Ok(OperationResult::new(path.to_path_buf(), data))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write(_) => "write",
        }
    }
}
