//! Parse state folded across the lines of a song
//!
//! Holds the song built so far, the section currently being filled and the
//! name → index map backing chord deduplication. The dispatcher takes the
//! state by value and hands it back, so a parse is a plain fold over the
//! input lines.

use std::collections::HashMap;

use super::options::ParseOptions;
use crate::models::{ChordDefinition, Environment, Line, Section, Song};

#[derive(Debug, Clone)]
pub struct ParseState {
    pub song: Song,
    pub section: Section,
    /// Index into `song.chords` of the most recently added entry per name
    chord_index: HashMap<String, usize>,
}

impl ParseState {
    pub fn new(options: &ParseOptions) -> Self {
        let mut song = Song::new(options.instrument);
        song.transpose = options.transpose;
        let section = Section::new(song.sections.len() + 1);
        Self {
            song,
            section,
            chord_index: HashMap::new(),
        }
    }

    /// Start a section of the given environment
    ///
    /// An empty current section is retyped in place; otherwise it is closed
    /// and a fresh one (next id) takes its place.
    pub fn open_section(&mut self, label: &str, environment: Environment) {
        if !self.section.lines.is_empty() {
            self.close_section();
        }
        self.section.environment = environment;
        self.section.label = label.to_string();
    }

    /// Append the current section to the song, whatever it holds, and
    /// start an untyped one
    pub fn close_section(&mut self) {
        let next = Section::new(self.song.sections.len() + 2);
        let finished = std::mem::replace(&mut self.section, next);
        log::trace!(
            "closing section {} ({:?}) with {} lines",
            finished.id,
            finished.environment,
            finished.lines.len()
        );
        self.song.sections.push(finished);
    }

    /// Give an untyped section a type and its default label
    pub fn promote(&mut self, environment: Environment) {
        if self.section.environment == Environment::None {
            self.section.environment = environment;
            self.section.label = environment.default_label().to_string();
        }
    }

    pub fn new_line(&self) -> Line {
        Line::new(self.section.next_line_id())
    }

    pub fn push_line(&mut self, line: Line) {
        self.section.lines.push(line);
    }

    /// Index of the most recently added chord with this display name
    pub fn chord_index(&self, name: &str) -> Option<usize> {
        self.chord_index.get(name).copied()
    }

    /// Append a chord with a fresh id and return that id
    pub fn push_chord(&mut self, mut chord: ChordDefinition) -> usize {
        let id = self.song.chords.len() + 1;
        chord.id = id;
        self.chord_index.insert(chord.name.clone(), self.song.chords.len());
        self.song.chords.push(chord);
        id
    }

    /// Overwrite the chord at `index`, keeping its id
    ///
    /// The name must be unchanged so the index map stays valid.
    pub fn replace_chord(&mut self, index: usize, mut chord: ChordDefinition) -> usize {
        let id = self.song.chords[index].id;
        debug_assert_eq!(self.song.chords[index].name, chord.name);
        chord.id = id;
        self.song.chords[index] = chord;
        id
    }

    /// Close the trailing section and apply end-of-song defaults
    pub fn finish(mut self) -> Song {
        if !self.section.lines.is_empty() {
            self.song.sections.push(self.section);
        }
        if self.song.key.is_none() {
            self.song.key = self.song.chords.first().cloned();
        }
        self.song
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Instrument, Part};

    fn line_with_text(state: &ParseState, text: &str) -> Line {
        let mut line = state.new_line();
        line.parts.push(Part {
            id: 1,
            chord: None,
            text: text.to_string(),
        });
        line
    }

    #[test]
    fn test_open_section_retypes_empty_section() {
        let mut state = ParseState::new(&ParseOptions::default());
        state.open_section("Chorus", Environment::Chorus);
        state.open_section("Verse", Environment::Verse);
        assert_eq!(state.section.id, 1);
        assert_eq!(state.section.environment, Environment::Verse);
        assert!(state.song.sections.is_empty());
    }

    #[test]
    fn test_open_section_closes_filled_section() {
        let mut state = ParseState::new(&ParseOptions::default());
        state.open_section("Verse", Environment::Verse);
        let line = line_with_text(&state, "hello");
        state.push_line(line);
        state.open_section("Chorus", Environment::Chorus);

        assert_eq!(state.song.sections.len(), 1);
        assert_eq!(state.song.sections[0].environment, Environment::Verse);
        assert_eq!(state.section.id, 2);
        assert_eq!(state.section.label, "Chorus");
    }

    #[test]
    fn test_promote_only_untyped() {
        let mut state = ParseState::new(&ParseOptions::default());
        state.promote(Environment::Tab);
        assert_eq!(state.section.label, "Tab");

        state.open_section("Intro", Environment::Chorus);
        state.promote(Environment::Verse);
        assert_eq!(state.section.environment, Environment::Chorus);
        assert_eq!(state.section.label, "Intro");
    }

    #[test]
    fn test_finish_drops_empty_trailing_section() {
        let mut state = ParseState::new(&ParseOptions::default());
        state.open_section("Verse", Environment::Verse);
        let song = state.finish();
        assert!(song.sections.is_empty());
    }

    #[test]
    fn test_chord_ids_are_sequential() {
        let mut state = ParseState::new(&ParseOptions::default());
        let first = state.push_chord(ChordDefinition::unknown("X", Instrument::Guitar));
        let second = state.push_chord(ChordDefinition::unknown("Y", Instrument::Guitar));
        assert_eq!((first, second), (1, 2));
        assert_eq!(state.chord_index("Y"), Some(1));
    }
}
