//! Song document structures
//!
//! The parser's output. A `Song` holds metadata, the ordered sections and
//! the ordered, deduplicated chord definitions the sections refer to.

use serde::{Deserialize, Serialize};

use super::chord::ChordDefinition;
use super::instrument::Instrument;

/// Zero-width non-joiner appended to lyric runs so trailing whitespace
/// survives text layout
pub const LYRIC_JOINER: char = '\u{200c}';

/// The environment (structural type) of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Environment {
    /// Not yet typed
    #[default]
    None,
    Chorus,
    RepeatChorus,
    Verse,
    Bridge,
    Comment,
    Tab,
    Grid,
    Strum,
}

impl Environment {
    /// Label a section gets when the directive does not give one
    pub fn default_label(&self) -> &'static str {
        match self {
            Environment::None => "",
            Environment::Chorus => "Chorus",
            Environment::RepeatChorus => "Repeat Chorus",
            Environment::Verse => "Verse",
            Environment::Bridge => "Bridge",
            Environment::Comment => "Comment",
            Environment::Tab => "Tab",
            Environment::Grid => "Grid",
            Environment::Strum => "Strum",
        }
    }
}

/// One part of a lyric or grid line: a chord, a lyric run or a spacer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: usize,
    /// Id of an entry in `Song::chords`
    pub chord: Option<usize>,
    pub text: String,
}

impl Part {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chord.is_none() && self.text.is_empty()
    }
}

/// One bar cell of a grid line
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub id: usize,
    pub parts: Vec<Part>,
}

/// A strum line rendered as a glyph row over a ruler row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrumPattern {
    pub pattern: String,
    pub ruler: String,
}

/// A line within a section
///
/// Which field is filled depends on the line kind: `parts` for lyrics,
/// `comment`, `tab`, `grid` or `strum`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: usize,
    pub parts: Vec<Part>,
    pub comment: Option<String>,
    pub tab: Option<String>,
    pub grid: Vec<Grid>,
    pub strum: Option<StrumPattern>,
}

impl Line {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: usize,
    #[serde(rename = "type")]
    pub environment: Environment,
    pub label: String,
    pub lines: Vec<Line>,
}

impl Section {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Id for the next line appended to this section
    pub fn next_line_id(&self) -> usize {
        self.lines.len() + 1
    }
}

/// A parsed song
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub capo: Option<String>,
    pub time: Option<String>,
    pub key: Option<ChordDefinition>,
    pub tempo: Option<String>,
    pub year: Option<String>,
    pub album: Option<String>,
    pub music_path: Option<String>,
    pub tags: Vec<String>,
    /// Song-wide transpose in semitones
    pub transpose: i32,
    pub instrument: Instrument,
    pub sections: Vec<Section>,
    pub chords: Vec<ChordDefinition>,
}

impl Song {
    pub fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            ..Default::default()
        }
    }

    pub fn chord(&self, id: usize) -> Option<&ChordDefinition> {
        self.chords.iter().find(|chord| chord.id == id)
    }

    /// Chords ordered by name, as listed in chord diagrams
    pub fn sorted_chords(&self) -> Vec<&ChordDefinition> {
        let mut chords: Vec<&ChordDefinition> = self.chords.iter().collect();
        chords.sort_by(|a, b| a.name.cmp(&b.name));
        chords
    }

    /// Beats per bar from the time signature (`"3/4"` → 3); 4 when unset
    pub fn beats_per_bar(&self) -> u32 {
        self.time
            .as_deref()
            .and_then(|time| {
                let digits: String = time.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse().ok()
            })
            .filter(|&beats| beats > 0)
            .unwrap_or(4)
    }

    /// Tempo in beats per minute, clamped to 30-300; 60 when unset
    pub fn bpm(&self) -> f32 {
        self.tempo
            .as_deref()
            .and_then(|tempo| tempo.trim().parse::<f32>().ok())
            .filter(|bpm| bpm.is_finite())
            .map(|bpm| bpm.clamp(30.0, 300.0))
            .unwrap_or(60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_per_bar() {
        let mut song = Song::default();
        assert_eq!(song.beats_per_bar(), 4);
        song.time = Some("3/4".to_string());
        assert_eq!(song.beats_per_bar(), 3);
        song.time = Some("12/8".to_string());
        assert_eq!(song.beats_per_bar(), 12);
        song.time = Some("common".to_string());
        assert_eq!(song.beats_per_bar(), 4);
    }

    #[test]
    fn test_bpm_clamped() {
        let mut song = Song::default();
        assert_eq!(song.bpm(), 60.0);
        song.tempo = Some("120".to_string());
        assert_eq!(song.bpm(), 120.0);
        song.tempo = Some("500".to_string());
        assert_eq!(song.bpm(), 300.0);
        song.tempo = Some("fast".to_string());
        assert_eq!(song.bpm(), 60.0);
    }

    #[test]
    fn test_section_serializes_type() {
        let section = Section {
            id: 1,
            environment: Environment::RepeatChorus,
            label: "Repeat Chorus".to_string(),
            lines: vec![],
        };
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "repeatChorus");
    }

    #[test]
    fn test_empty_part() {
        assert!(Part::new(1).is_empty());
        let part = Part { id: 1, chord: Some(3), text: String::new() };
        assert!(!part.is_empty());
    }
}
