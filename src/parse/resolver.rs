//! Chord resolution
//!
//! Turns chord tokens and `define` bodies into entries of `song.chords`.
//! Every distinct name is looked up (and transposed) once per song; later
//! tokens with the same name reuse the entry.

use super::state::ParseState;
use crate::models::{ChordDefinition, ChordStatus, Root};

impl ParseState {
    /// Root the song's chords are spelled against when transposing
    fn transpose_scale(&self) -> Root {
        self.song
            .key
            .as_ref()
            .and_then(|key| key.root)
            .unwrap_or(Root::C)
    }

    /// Resolve a chord name to a definition in `song.chords`
    ///
    /// Order: an existing entry with this display name (the latest one),
    /// then the chord database, then an unknown placeholder.
    pub fn resolve_chord(&mut self, name: &str) -> &ChordDefinition {
        if let Some(index) = self.chord_index(name) {
            return &self.song.chords[index];
        }

        let instrument = self.song.instrument;
        let chord = match ChordDefinition::from_name(name, instrument) {
            Some(mut chord) => {
                let transpose = self.song.transpose;
                if transpose != 0 {
                    chord.transpose(transpose, self.transpose_scale());
                    // The song shows the chord as written
                    chord.name = name.to_string();
                }
                chord
            }
            None => {
                log::debug!("unknown chord '{}' for {}", name, instrument);
                ChordDefinition::unknown(name, instrument)
            }
        };

        let id = self.push_chord(chord);
        &self.song.chords[id - 1]
    }

    /// Add a chord from a `define` body
    ///
    /// A standard or transposed entry of the same name is replaced in
    /// place, keeping its id, so lines already referring to it pick up the
    /// definition. Returns `None` when the body does not parse.
    pub fn define_chord(&mut self, text: &str) -> Option<usize> {
        let instrument = self.song.instrument;
        let mut chord = match ChordDefinition::from_definition(text, instrument, ChordStatus::Unknown) {
            Ok(chord) => chord,
            Err(err) => {
                log::debug!("ignoring chord definition '{}': {}", text, err);
                return None;
            }
        };

        let transpose = self.song.transpose;
        if transpose != 0 {
            chord.transpose_custom(transpose, self.transpose_scale());
        }

        let existing = self.song.chords.iter().position(|c| {
            c.name == chord.name && matches!(c.status, ChordStatus::Standard | ChordStatus::Transposed)
        });

        Some(match existing {
            Some(index) => self.replace_chord(index, chord),
            None => self.push_chord(chord),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Instrument;
    use crate::parse::ParseOptions;

    fn state(transpose: i32) -> ParseState {
        ParseState::new(&ParseOptions::new(transpose, Instrument::Guitar))
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut state = state(0);
        let first = state.resolve_chord("Am").id;
        let second = state.resolve_chord("Am").id;
        assert_eq!(first, second);
        assert_eq!(state.song.chords.len(), 1);
    }

    #[test]
    fn test_resolve_unknown() {
        let mut state = state(0);
        let chord = state.resolve_chord("N.C.");
        assert_eq!(chord.status, ChordStatus::Unknown);
        assert_eq!(chord.name, "N.C.");
    }

    #[test]
    fn test_resolve_transposed_keeps_requested_name() {
        let mut state = state(2);
        let chord = state.resolve_chord("C").clone();
        assert_eq!(chord.name, "C");
        assert_eq!(chord.root, Some(Root::D));
        assert_eq!(chord.status, ChordStatus::Transposed);
        assert_eq!(chord.shape, ChordDefinition::from_name("D", Instrument::Guitar).unwrap().shape);
    }

    #[test]
    fn test_define_overwrites_standard_in_place() {
        let mut state = state(0);
        let id = state.resolve_chord("Am").id;
        let defined = state.define_chord("Am base-fret 5 frets x 3 2 2 1 x").unwrap();
        assert_eq!(defined, id);
        assert_eq!(state.song.chords.len(), 1);
        assert_eq!(state.song.chords[0].status, ChordStatus::Unknown);
        assert_eq!(state.song.chords[0].shape.base_fret, 5);
    }

    #[test]
    fn test_define_twice_appends() {
        let mut state = state(0);
        let first = state.define_chord("X frets 0 0 0 0 0 0").unwrap();
        let second = state.define_chord("X frets 1 1 1 1 1 1").unwrap();
        assert_ne!(first, second);
        // Resolution picks the most recent definition
        assert_eq!(state.resolve_chord("X").id, second);
    }

    #[test]
    fn test_define_transposed() {
        let mut state = state(3);
        let id = state.define_chord("X frets 0 2 2 1 0 0").unwrap();
        let chord = &state.song.chords[id - 1];
        assert_eq!(chord.name, "X");
        assert_eq!(chord.status, ChordStatus::CustomTransposed);
        assert_eq!(chord.shape.absolute_frets()[0], Some(3));
    }

    #[test]
    fn test_define_invalid() {
        let mut state = state(0);
        assert_eq!(state.define_chord("frets 1 2 3"), None);
        assert!(state.song.chords.is_empty());
    }
}
