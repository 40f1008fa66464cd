//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation through a [`crate::Tagger`]. Results are written to
//! the given writer so the binary can pass stdout and tests a buffer.

pub mod config;
pub mod read;
pub mod write;

use std::io::Write;

use crate::MusicTagError;
use crate::config::PathFormat;
use crate::output;
use crate::types::Outcome;

// Re-export execute functions for convenience
pub use self::config::execute as config;
pub use self::read::execute as read;
pub use self::write::execute as write;

type Result<T> = std::result::Result<T, MusicTagError>;

/// How results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    pub path_format: PathFormat,
    pub quiet: bool,
    pub json: bool,
}

/// Print an outcome as text or JSON
///
/// # Errors
/// Returns `MusicTagError` if serialization or writing fails.
pub(crate) fn print_outcome(
    out: &mut impl Write,
    outcome: &Outcome,
    style: OutputStyle,
    verb: &str,
) -> Result<()> {
    if style.json {
        writeln!(out, "{}", output::outcome_json(outcome)?)?;
        return Ok(());
    }

    for line in output::outcome_lines(outcome, style.path_format, style.quiet) {
        writeln!(out, "{line}")?;
    }
    if outcome.is_list() && !style.quiet {
        writeln!(out, "{}", output::summary(verb, outcome.len()))?;
    }
    Ok(())
}
