//! Cursor-word widening.
//!
//! A hover target is not a single word: a command fragment like
//! `fix_modify AtC output every` has to reach the resolver in one piece.
//! The widening pattern starts from a word/slash run and extends over
//! interior whitespace up to (but excluding) a `#` comment marker.

use crate::text;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w/]+(?:[ \t]+[^#\s]+)*").expect("word pattern must compile")
});

/// A widened snippet with its UTF-16 column range on the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub text: String,
    pub start: u32,
    pub end: u32,
}

/// Returns the widened snippet under the given UTF-16 column, if any.
///
/// A cursor sitting exactly on either boundary of a match still counts as
/// inside it, matching editor word-range semantics.
pub fn word_at(line: &str, character: u32) -> Option<WordSpan> {
    for found in WORD_PATTERN.find_iter(line) {
        let start = text::byte_to_utf16_col(line, found.start());
        let end = text::byte_to_utf16_col(line, found.end());
        if start <= character && character <= end {
            return Some(WordSpan {
                text: found.as_str().to_string(),
                start,
                end,
            });
        }
    }
    None
}
