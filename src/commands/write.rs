//! Write command

use std::io::Write;
use std::path::Path;

use super::{OutputStyle, Result, print_outcome};
use crate::MusicTagError;
use crate::facade::{Tagger, parse_tags};
use crate::types::{Options, TagSet};

/// Combine `--tags-json` and `-t` pairs; pairs win on conflicting keys
///
/// # Errors
/// Returns an error if the JSON does not parse or is not an object of scalars,
/// or if no tags were given at all
pub fn collect_tags(pairs: &[(String, String)], tags_json: Option<&str>) -> Result<TagSet> {
    let mut tags = match tags_json {
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(raw)?;
            parse_tags(&value)?
        }
        None => TagSet::new(),
    };
    tags.merge(&pairs.iter().cloned().collect());

    if tags.is_empty() {
        return Err(MusicTagError::InvalidInput(
            "No tags provided. Use -t KEY=VALUE or --tags-json".into(),
        ));
    }
    Ok(tags)
}

/// Execute the write command - merge tags into a file or directory
///
/// # Errors
/// Returns an error if no tags were given, the write fails, or output cannot be written
pub fn execute(
    tagger: &Tagger,
    path: &Path,
    tags: &TagSet,
    options: Options,
    style: OutputStyle,
    out: &mut impl Write,
) -> Result<()> {
    let outcome = tagger.write(path, tags, Some(options))?;
    print_outcome(out, &outcome, style, "Updated")
}
