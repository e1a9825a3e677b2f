//! ChordPro parsing
//!
//! One pass over the input lines turns ChordPro text into a [`Song`]:
//! directives set metadata and open or close sections, content lines are
//! split into chord and lyric parts, and every chord name is resolved once
//! against the chord database.

pub mod directive;
pub mod dispatcher;
pub mod lines;
pub mod options;
pub mod resolver;
pub mod state;
pub mod tokens;

pub use directive::{match_directive, Directive, MetaField};
pub use options::ParseOptions;
pub use state::ParseState;
pub use tokens::{tokenize, LineToken};

use crate::models::Song;

/// Parse ChordPro text into a song
///
/// Never fails: malformed directives are dropped and unresolvable chords
/// become unknown placeholders.
pub fn parse(text: &str, options: &ParseOptions) -> Song {
    log::debug!(
        "parsing {} bytes (transpose {}, {})",
        text.len(),
        options.transpose,
        options.instrument
    );

    let song = text
        .lines()
        .fold(ParseState::new(options), dispatcher::process_line)
        .finish();

    log::debug!(
        "parsed {} sections, {} chords",
        song.sections.len(),
        song.chords.len()
    );
    song
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Environment;

    #[test]
    fn test_parse_empty() {
        let song = parse("", &ParseOptions::default());
        assert!(song.sections.is_empty());
        assert!(song.chords.is_empty());
        assert_eq!(song.key, None);
    }

    #[test]
    fn test_parse_crlf() {
        let song = parse("{title: Foo}\r\n[C]la\r\n", &ParseOptions::default());
        assert_eq!(song.title.as_deref(), Some("Foo"));
        assert_eq!(song.sections.len(), 1);
        assert_eq!(song.sections[0].environment, Environment::Verse);
    }

    #[test]
    fn test_default_key_is_first_chord() {
        let song = parse("[Am]one [G]two", &ParseOptions::default());
        assert_eq!(song.key.map(|key| key.name), Some("Am".to_string()));
    }
}
