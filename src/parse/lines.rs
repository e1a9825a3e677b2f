//! Line processors: tab, grid, strum and lyric (chord + text) lines
//!
//! Each processor appends exactly one line to the current section.

use super::state::ParseState;
use super::tokens::{tokenize, LineToken};
use crate::models::{Environment, Grid, Part, StrumPattern, LYRIC_JOINER};

/// Glyphs for strum symbols; anything else is shown as typed
const STRUM_GLYPHS: &[(char, char)] = &[
    ('d', '↓'),
    ('u', '↑'),
    ('D', '⇓'),
    ('U', '⇑'),
    ('x', '✕'),
    ('-', '·'),
];

fn strum_glyph(symbol: char) -> char {
    STRUM_GLYPHS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(symbol)
}

/// Store the line verbatim as tablature
pub fn process_tab(state: &mut ParseState, text: &str) {
    let mut line = state.new_line();
    line.tab = Some(text.trim().to_string());
    state.push_line(line);
    state.promote(Environment::Tab);
}

/// Split a grid line into bar cells of chords and `.` spacers
///
/// Part ids run across the whole line; each cell takes the id of its
/// first part.
pub fn process_grid(state: &mut ParseState, text: &str) {
    let mut line = state.new_line();
    let mut part_id = 1;

    let compact: String = text.chars().filter(|c| *c != ' ').collect();
    for cell in compact.split('|').filter(|cell| !cell.is_empty()) {
        let mut grid = Grid {
            id: part_id,
            parts: Vec::new(),
        };
        for token in tokenize(cell) {
            match token {
                LineToken::Chord(name) => {
                    let chord = state.resolve_chord(name).id;
                    grid.parts.push(Part {
                        id: part_id,
                        chord: Some(chord),
                        text: String::new(),
                    });
                    part_id += 1;
                }
                LineToken::Text(spacer) => {
                    // One placeholder per character, never merged
                    for _ in spacer.chars() {
                        grid.parts.push(Part {
                            id: part_id,
                            chord: None,
                            text: ".".to_string(),
                        });
                        part_id += 1;
                    }
                }
            }
        }
        line.grid.push(grid);
    }

    state.push_line(line);
    state.promote(Environment::Grid);
}

/// Render strum symbols as a glyph row over a ruler row
///
/// Even positions get a `==` ruler under the glyph; odd positions get a
/// space on both rows.
pub fn process_strum(state: &mut ParseState, text: &str) {
    let mut line = state.new_line();
    let mut pattern = String::new();
    let mut ruler = String::new();

    for (index, symbol) in text.trim().chars().enumerate() {
        pattern.push(strum_glyph(symbol));
        if index % 2 == 0 {
            ruler.push_str("==");
        } else {
            pattern.push(' ');
            ruler.push(' ');
        }
    }

    line.strum = Some(StrumPattern { pattern, ruler });
    state.push_line(line);
}

/// Split a lyric line into chord parts and lyric parts
///
/// A chord part shows a single space; a lyric part carries the joiner so
/// trailing spaces survive layout. A chord promotes an untyped section to
/// a verse.
pub fn process_lyrics(state: &mut ParseState, text: &str) {
    let mut line = state.new_line();
    let mut part_id = 1;

    for token in tokenize(text) {
        let mut part = Part::new(part_id);
        match token {
            LineToken::Chord(name) => {
                part.chord = Some(state.resolve_chord(name).id);
                part.text = " ".to_string();
                state.promote(Environment::Verse);
            }
            LineToken::Text(lyric) => {
                part.text = format!("{}{}", lyric, LYRIC_JOINER);
            }
        }
        if !part.is_empty() {
            part_id += 1;
            line.parts.push(part);
        }
    }

    state.push_line(line);
}
