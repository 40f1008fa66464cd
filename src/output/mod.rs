//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including path display formatting and file/tag formatting.

use crate::config::PathFormat;
use crate::types::{OperationResult, Outcome, TagSet};
use colored::Colorize;
use std::path::Path;

/// Format a path according to the display mode
#[must_use]
pub fn format_path(path: &Path, format: PathFormat) -> String {
    match format {
        PathFormat::Absolute => path.display().to_string(),
        PathFormat::Relative => {
            if let Ok(cwd) = std::env::current_dir()
                && let Ok(rel_path) = path.strip_prefix(&cwd)
            {
                return rel_path.display().to_string();
            }
            // Fallback to absolute if relative path cannot be computed
            path.display().to_string()
        }
    }
}

/// Format one tag entry
#[must_use]
pub fn tag_line(key: &str, value: &str) -> String {
    format!("    {} = {}", key.cyan(), value)
}

/// Format the tags of one file, one line per tag
#[must_use]
pub fn tag_lines(tags: &TagSet) -> Vec<String> {
    if tags.is_empty() {
        return vec![format!("    {}", "(no tags)".dimmed())];
    }
    tags.iter().map(|(k, v)| tag_line(k, v)).collect()
}

/// Format a result: the path as a header followed by its tags
///
/// In quiet mode only the path is printed.
#[must_use]
pub fn result_lines(result: &OperationResult, format: PathFormat, quiet: bool) -> Vec<String> {
    let path_str = format_path(&result.path, format);
    if quiet {
        return vec![path_str];
    }

    let mut lines = vec![path_str.bold().to_string()];
    lines.extend(tag_lines(&result.data));
    lines
}

/// Format every result of an outcome in order
#[must_use]
pub fn outcome_lines(outcome: &Outcome, format: PathFormat, quiet: bool) -> Vec<String> {
    outcome
        .as_slice()
        .iter()
        .flat_map(|r| result_lines(r, format, quiet))
        .collect()
}

/// Serialize an outcome: an object for a file, an array for a directory
///
/// # Errors
/// Returns `serde_json::Error` if serialization fails.
pub fn outcome_json(outcome: &Outcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}

/// Summary line printed after a directory operation
#[must_use]
pub fn summary(verb: &str, count: usize) -> String {
    format!("{verb} {count} file(s)").green().to_string()
}
