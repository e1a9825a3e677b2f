//! Token recognition for lyric and grid lines
//!
//! A line is a sequence of bracketed chords (`[Am]`) and the text between
//! them. A `[` without a matching `]` is kept as text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Chord in brackets, or a run of text up to the next `[`, or a stray `[`
static LINE_TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]+)\]|([^\[]+|\[)").expect("line token pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineToken<'a> {
    Chord(&'a str),
    Text(&'a str),
}

/// Split a line into chord and text tokens, in order
///
/// The pattern never matches the empty string, so there is no trailing
/// empty token to discard.
pub fn tokenize(text: &str) -> Vec<LineToken<'_>> {
    LINE_TOKEN_REGEX
        .captures_iter(text)
        .filter_map(|captures| {
            if let Some(chord) = captures.get(1) {
                Some(LineToken::Chord(chord.as_str()))
            } else {
                captures.get(2).map(|text| LineToken::Text(text.as_str()))
            }
        })
        .collect()
}
