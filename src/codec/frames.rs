//! Mapping between `TagSet` keys and ID3v2 frames
//!
//! Well-known names map onto their standard text frames, `comment` and
//! `lyrics` map onto the COMM/USLT frame with an empty description, raw
//! four-letter text frame ids pass through as-is, and anything else lives in a
//! TXXX frame keyed by its description.
//!
//! A raw id that backs a well-known name (`TIT2` for `title`) is not a valid
//! key: it would read back under the name.

use id3::frame::{Comment, Content, ExtendedText, Frame, Lyrics};
use id3::{Tag, TagLike};

use super::CodecError;
use crate::types::TagSet;

const COMMENT_KEY: &str = "comment";
const LYRICS_KEY: &str = "lyrics";
const DEFAULT_LANG: &str = "eng";

/// Well-known tag names and the text frame backing each of them
const TEXT_FRAMES: &[(&str, &str)] = &[
    ("title", "TIT2"),
    ("artist", "TPE1"),
    ("album", "TALB"),
    ("album_artist", "TPE2"),
    ("composer", "TCOM"),
    ("genre", "TCON"),
    ("year", "TYER"),
    ("date", "TDRC"),
    ("track", "TRCK"),
    ("disc", "TPOS"),
    ("grouping", "TIT1"),
    ("subtitle", "TIT3"),
    ("lyricist", "TEXT"),
    ("conductor", "TPE3"),
    ("remixer", "TPE4"),
    ("publisher", "TPUB"),
    ("bpm", "TBPM"),
    ("key", "TKEY"),
    ("mood", "TMOO"),
    ("language", "TLAN"),
    ("isrc", "TSRC"),
    ("encoded_by", "TENC"),
    ("encoder_settings", "TSSE"),
    ("copyright", "TCOP"),
    ("title_sort", "TSOT"),
    ("artist_sort", "TSOP"),
    ("album_sort", "TSOA"),
    ("album_artist_sort", "TSO2"),
];

fn frame_for_name(name: &str) -> Option<&'static str> {
    TEXT_FRAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, id)| *id)
}

fn name_for_frame(id: &str) -> Option<&'static str> {
    TEXT_FRAMES
        .iter()
        .find(|(_, frame)| *frame == id)
        .map(|(name, _)| *name)
}

/// Keys reserved for a dedicated frame; TXXX frames never shadow them
fn is_reserved(key: &str) -> bool {
    key == COMMENT_KEY || key == LYRICS_KEY || frame_for_name(key).is_some() || is_text_frame_id(key)
}

/// `T` followed by three uppercase letters or digits, excluding TXXX
pub(crate) fn is_text_frame_id(key: &str) -> bool {
    key.len() == 4
        && key.starts_with('T')
        && key != "TXXX"
        && key
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Flatten every frame we understand into a `TagSet`
pub(crate) fn to_tag_set(tag: &Tag) -> TagSet {
    let mut out = TagSet::new();
    let mut user_defined = Vec::new();

    for frame in tag.frames() {
        match frame.content() {
            Content::Text(value) => {
                let key = name_for_frame(frame.id()).unwrap_or(frame.id());
                out.insert(key, value.clone());
            }
            Content::ExtendedText(ext) => user_defined.push(ext),
            Content::Comment(comment) if comment.description.is_empty() && !out.contains_key(COMMENT_KEY) => {
                out.insert(COMMENT_KEY, comment.text.clone());
            }
            Content::Lyrics(lyrics) if lyrics.description.is_empty() && !out.contains_key(LYRICS_KEY) => {
                out.insert(LYRICS_KEY, lyrics.text.clone());
            }
            _ => {}
        }
    }

    for ext in user_defined {
        if !is_reserved(&ext.description) && !out.contains_key(&ext.description) {
            out.insert(ext.description.clone(), ext.value.clone());
        }
    }

    out
}

/// Whether a COMM/USLT frame is the one `comment`/`lyrics` stand for
fn is_unnamed(frame: &Frame) -> bool {
    match frame.content() {
        Content::Comment(comment) => comment.description.is_empty(),
        Content::Lyrics(lyrics) => lyrics.description.is_empty(),
        _ => false,
    }
}

/// Replace the unnamed `id` frames with `frame`, keeping described ones
fn replace_unnamed(tag: &mut Tag, id: &str, frame: impl Into<Frame>) {
    let kept: Vec<Frame> = tag.remove(id).into_iter().filter(|f| !is_unnamed(f)).collect();
    for other in kept {
        let _ = tag.add_frame(other);
    }
    let _ = tag.add_frame(frame);
}

/// Reject keys that cannot be read back under the same name
///
/// # Errors
/// Returns `CodecError::Unsupported` for a raw frame id that backs a
/// well-known name.
pub(crate) fn validate(tags: &TagSet) -> Result<(), CodecError> {
    for (key, _) in tags {
        if let Some(name) = name_for_frame(key) {
            return Err(CodecError::Unsupported(format!(
                "'{key}' is stored as '{name}'; write it under that name"
            )));
        }
    }
    Ok(())
}

/// Write every entry of `tags` into `tag`, leaving other frames alone
///
/// Nothing is written when any key is rejected by [`validate`].
///
/// # Errors
/// See [`validate`].
pub(crate) fn apply(tag: &mut Tag, tags: &TagSet) -> Result<(), CodecError> {
    validate(tags)?;

    for (key, value) in tags {
        if let Some(id) = frame_for_name(key) {
            tag.set_text(id, value.clone());
        } else if key == COMMENT_KEY {
            replace_unnamed(
                tag,
                "COMM",
                Comment {
                    lang: DEFAULT_LANG.to_string(),
                    description: String::new(),
                    text: value.clone(),
                },
            );
        } else if key == LYRICS_KEY {
            replace_unnamed(
                tag,
                "USLT",
                Lyrics {
                    lang: DEFAULT_LANG.to_string(),
                    description: String::new(),
                    text: value.clone(),
                },
            );
        } else if is_text_frame_id(key) {
            tag.set_text(key.as_str(), value.clone());
        } else {
            let _ = tag.add_frame(ExtendedText {
                description: key.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}
