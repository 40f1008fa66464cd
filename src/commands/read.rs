//! Read command

use std::io::Write;
use std::path::Path;

use super::{OutputStyle, Result, print_outcome};
use crate::facade::Tagger;
use crate::types::Options;

/// Execute the read command - print the tags of a file or directory
///
/// # Errors
/// Returns an error if the read fails or output cannot be written
pub fn execute(
    tagger: &Tagger,
    path: &Path,
    options: Options,
    style: OutputStyle,
    out: &mut impl Write,
) -> Result<()> {
    let outcome = tagger.read(path, Some(options))?;
    print_outcome(out, &outcome, style, "Read")
}
