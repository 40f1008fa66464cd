//! Loosely-typed entry points
//!
//! Arguments arrive as `serde_json::Value`s, the shape they have when they
//! come from a script, a config file or the command line. Everything is
//! validated before any filesystem access.

use serde_json::Value;
use std::path::PathBuf;

use super::Tagger;
use crate::error::TagError;
use crate::types::{Options, Outcome, PartialOptions, TagSet};

/// Read using JSON arguments
///
/// `path` must be a string; `options` must be absent, `null`, or an object
/// with only recognized keys.
///
/// # Errors
/// Returns `InvalidArgument` for malformed arguments, otherwise whatever
/// [`Tagger::read`] returns.
pub fn read_value(tagger: &Tagger, path: &Value, options: Option<&Value>) -> Result<Outcome, TagError> {
    let path = parse_path(path)?;
    let options = parse_options(options)?;
    tagger.read(path, Some(options))
}

/// Write using JSON arguments
///
/// `tags` must be an object whose values are strings, numbers or booleans.
///
/// # Errors
/// Returns `InvalidArgument` for malformed arguments, otherwise whatever
/// [`Tagger::write`] returns.
pub fn write_value(
    tagger: &Tagger,
    path: &Value,
    tags: &Value,
    options: Option<&Value>,
) -> Result<Outcome, TagError> {
    let path = parse_path(path)?;
    let tags = parse_tags(tags)?;
    let options = parse_options(options)?;
    tagger.write(path, &tags, Some(options))
}

pub(crate) fn parse_path(value: &Value) -> Result<PathBuf, TagError> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(PathBuf::from(s)),
        other => Err(TagError::invalid_argument("path", display(other))),
    }
}

pub(crate) fn parse_options(value: Option<&Value>) -> Result<Options, TagError> {
    match value {
        None | Some(Value::Null) => Ok(Options::DEFAULT),
        Some(obj @ Value::Object(_)) => serde_json::from_value::<PartialOptions>(obj.clone())
            .map(PartialOptions::resolve)
            .map_err(|e| TagError::invalid_argument("options", format!("{} ({e})", display(obj)))),
        Some(other) => Err(TagError::invalid_argument("options", display(other))),
    }
}

/// Convert an object into a `TagSet`, stringifying scalar values
///
/// # Errors
/// Returns `InvalidArgument` unless `value` is an object of strings,
/// numbers and booleans.
pub fn parse_tags(value: &Value) -> Result<TagSet, TagError> {
    let Value::Object(map) = value else {
        return Err(TagError::invalid_argument("tags", display(value)));
    };

    let mut tags = TagSet::new();
    for (key, raw) in map {
        let text = match raw {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(TagError::invalid_argument(
                    "tags",
                    format!("value of '{key}' must be a string, got {other}"),
                ));
            }
        };
        tags.insert(key.clone(), text);
    }
    Ok(tags)
}

/// Render the offending value the way a user typed it: strings bare, the rest as JSON
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::{AudioTree, MemoryCodec, tag_set};
    use serde_json::json;
    use std::sync::Arc;

    fn tagger() -> (Tagger, Arc<MemoryCodec>) {
        let codec = Arc::new(MemoryCodec::new());
        (Tagger::with_codec(codec.clone()), codec)
    }

    #[test]
    fn test_non_string_paths_rejected() {
        let (tagger, codec) = tagger();
        for bad in [json!(0), json!(null), json!(true), json!(["a"]), json!({"p": 1}), json!("")] {
            let err = read_value(&tagger, &bad, None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "path {bad}");

            let err = write_value(&tagger, &bad, &json!({"year": "1999"}), None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "path {bad}");
        }
        assert!(codec.calls().is_empty());
    }

    #[test]
    fn test_invalid_path_message() {
        let (tagger, _) = tagger();
        let err = read_value(&tagger, &json!(0), None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid path argument: 0");
    }

    #[test]
    fn test_non_object_options_rejected() {
        let (tagger, codec) = tagger();
        let tree = AudioTree::new();
        let path = json!(tree.audio_file("a.mp3").to_string_lossy());

        for bad in [json!(1), json!("recursive"), json!([true]), json!(false)] {
            let err = read_value(&tagger, &path, Some(&bad)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "options {bad}");
        }
        let err = read_value(&tagger, &path, Some(&json!(1))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid options argument: 1");
        assert!(codec.calls().is_empty());
    }

    #[test]
    fn test_unknown_or_mistyped_option_keys_rejected() {
        let (tagger, _) = tagger();
        let path = json!("/nowhere");

        let err = read_value(&tagger, &path, Some(&json!({"depth": 1}))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = read_value(&tagger, &path, Some(&json!({"recursive": "no"}))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_options_parsing() {
        assert_eq!(parse_options(None).unwrap(), Options::DEFAULT);
        assert_eq!(parse_options(Some(&json!(null))).unwrap(), Options::DEFAULT);
        assert_eq!(parse_options(Some(&json!({}))).unwrap(), Options::DEFAULT);
        assert!(!parse_options(Some(&json!({"recursive": false}))).unwrap().recursive);
    }

    #[test]
    fn test_non_object_tags_rejected() {
        let (tagger, codec) = tagger();
        let tree = AudioTree::new();
        let path = json!(tree.audio_file("a.mp3").to_string_lossy());

        for bad in [json!(1), json!("year=1999"), json!(["year"]), json!(null)] {
            let err = write_value(&tagger, &path, &bad, None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "tags {bad}");
        }
        let err = write_value(&tagger, &path, &json!({"art": {"nested": 1}}), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(codec.calls().is_empty());
    }

    #[test]
    fn test_tags_scalars_are_stringified() {
        let tags = parse_tags(&json!({"year": 1999, "compilation": true, "title": "T"})).unwrap();
        assert_eq!(
            tags,
            tag_set(&[("year", "1999"), ("compilation", "true"), ("title", "T")])
        );
    }

    #[test]
    fn test_valid_arguments_reach_the_codec() {
        let (tagger, codec) = tagger();
        let tree = AudioTree::new();
        tree.reference_layout();
        let dir = json!(tree.path().to_string_lossy());

        let outcome = write_value(&tagger, &dir, &json!({"year": "2005"}), Some(&json!({"recursive": false})))
            .unwrap();
        assert_eq!(outcome.len(), 3);

        let outcome = read_value(&tagger, &dir, None).unwrap();
        assert_eq!(outcome.len(), 7);
        assert_eq!(codec.calls().len(), 10);
    }
}
