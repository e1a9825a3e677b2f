//! Chord definitions as stored in a song
//!
//! A `ChordDefinition` is a named shape for one instrument together with
//! how it came to be (database, transposed, custom, unknown). Songs own
//! their definitions; lines refer to them by `id`.

use serde::{Deserialize, Serialize};

use super::instrument::Instrument;
use super::quality::Quality;
use super::root::Root;
use crate::chords::{self, ChordName, DefinitionError};

/// How a chord definition was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordStatus {
    /// Found in the chord database
    Standard,
    /// Found in the chord database and moved by the song transpose
    Transposed,
    /// Defined in the song and moved by the song transpose
    CustomTransposed,
    /// Defined in the song, or not found anywhere
    Unknown,
}

/// Fret positions for every string, lowest string first
///
/// Frets follow the ChordPro convention: with `base_fret` 1 they are
/// absolute, otherwise `1` means `base_fret`. `0` is an open string in
/// both cases and `None` a muted one. Fingers are 0 for "not fretted".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordShape {
    pub base_fret: u8,
    pub frets: Vec<Option<u8>>,
    pub fingers: Vec<u8>,
}

/// Highest fret a shape may reach before being normalised with a base fret
const OPEN_POSITION_LIMIT: u8 = 4;

impl ChordShape {
    /// Build a shape from absolute frets, choosing a base fret so the
    /// relative frets stay within a diagram
    pub fn from_absolute(frets: &[Option<u8>], fingers: Vec<u8>) -> Self {
        let highest = frets.iter().flatten().copied().max().unwrap_or(0);
        if highest <= OPEN_POSITION_LIMIT {
            return Self {
                base_fret: 1,
                frets: frets.to_vec(),
                fingers,
            };
        }

        let base_fret = frets
            .iter()
            .flatten()
            .copied()
            .filter(|&fret| fret > 0)
            .min()
            .unwrap_or(1);

        let relative = frets
            .iter()
            .map(|fret| fret.map(|f| if f == 0 { 0 } else { f - base_fret + 1 }))
            .collect();

        Self {
            base_fret,
            frets: relative,
            fingers,
        }
    }

    /// Absolute fret numbers, lowest string first
    pub fn absolute_frets(&self) -> Vec<Option<u8>> {
        self.frets
            .iter()
            .map(|fret| {
                fret.map(|f| {
                    if f == 0 || self.base_fret <= 1 {
                        f
                    } else {
                        f.saturating_add(self.base_fret - 1)
                    }
                })
            })
            .collect()
    }

    /// Sounding MIDI notes on the given instrument, lowest string first
    pub fn midi_notes(&self, instrument: Instrument) -> Vec<u8> {
        self.absolute_frets()
            .iter()
            .zip(instrument.tuning())
            .filter_map(|(fret, open)| fret.map(|f| open.saturating_add(f)))
            .collect()
    }

    /// Placeholder shape with every string muted
    pub fn muted(strings: usize) -> Self {
        Self {
            base_fret: 1,
            frets: vec![None; strings],
            fingers: vec![0; strings],
        }
    }
}

/// A chord as used by a song
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordDefinition {
    /// Identifier referenced by `Part::chord`; unique within a song
    pub id: usize,

    /// Display name, exactly as the song should show it
    pub name: String,

    pub root: Option<Root>,
    pub quality: Option<Quality>,
    /// Quality suffix as written in the name (kept for renaming on transpose)
    pub suffix: String,
    /// Slash-chord bass note
    pub bass: Option<Root>,

    pub shape: ChordShape,
    pub instrument: Instrument,
    pub status: ChordStatus,
}

impl ChordDefinition {
    /// Look a chord name up in the chord database
    ///
    /// Returns `None` when the name does not parse or no shape can be found
    /// for the instrument.
    pub fn from_name(name: &str, instrument: Instrument) -> Option<Self> {
        let parsed: ChordName = name.parse().ok()?;
        let shape = chords::lookup_by_name(name, instrument)?;
        Some(Self {
            id: 0,
            name: name.to_string(),
            root: Some(parsed.root),
            quality: Some(parsed.quality),
            suffix: parsed.suffix,
            bass: parsed.bass,
            shape,
            instrument,
            status: ChordStatus::Standard,
        })
    }

    /// Parse a ChordPro `define` body (`Am base-fret 1 frets x 0 2 2 1 0`)
    ///
    /// The name does not have to be a valid chord name; when it is, root,
    /// quality and bass are filled in.
    pub fn from_definition(
        text: &str,
        instrument: Instrument,
        status: ChordStatus,
    ) -> Result<Self, DefinitionError> {
        let definition = chords::parse_definition(text, instrument)?;
        let parsed = definition.name.parse::<ChordName>().ok();
        Ok(Self {
            id: 0,
            root: parsed.as_ref().map(|p| p.root),
            quality: parsed.as_ref().map(|p| p.quality),
            suffix: parsed.as_ref().map(|p| p.suffix.clone()).unwrap_or_default(),
            bass: parsed.and_then(|p| p.bass),
            name: definition.name,
            shape: definition.shape,
            instrument,
            status,
        })
    }

    /// Placeholder for a name nothing could resolve
    pub fn unknown(name: &str, instrument: Instrument) -> Self {
        let parsed = name.parse::<ChordName>().ok();
        Self {
            id: 0,
            name: name.to_string(),
            root: parsed.as_ref().map(|p| p.root),
            quality: parsed.as_ref().map(|p| p.quality),
            suffix: parsed.as_ref().map(|p| p.suffix.clone()).unwrap_or_default(),
            bass: parsed.and_then(|p| p.bass),
            shape: ChordShape::muted(instrument.strings()),
            instrument,
            status: ChordStatus::Unknown,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_absolute_open_position() {
        let shape = ChordShape::from_absolute(&[None, Some(3), Some(2), Some(0), Some(1), Some(0)], vec![0; 6]);
        assert_eq!(shape.base_fret, 1);
        assert_eq!(shape.frets[1], Some(3));
    }

    #[test]
    fn test_from_absolute_barre() {
        // B major, A shape at the second fret
        let frets = [None, Some(2), Some(4), Some(4), Some(4), Some(2)];
        let shape = ChordShape::from_absolute(&frets, vec![0; 6]);
        assert_eq!(shape.base_fret, 1);

        // A major, E shape at the fifth fret
        let frets = [Some(5), Some(7), Some(7), Some(6), Some(5), Some(5)];
        let shape = ChordShape::from_absolute(&frets, vec![0; 6]);
        assert_eq!(shape.base_fret, 5);
        assert_eq!(shape.frets, vec![Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)]);
        assert_eq!(shape.absolute_frets(), frets.to_vec());
    }

    #[test]
    fn test_midi_notes() {
        let shape = ChordShape::from_absolute(&[None, Some(3), Some(2), Some(0), Some(1), Some(0)], vec![0; 6]);
        // C3 E3 G3 C4 E4
        assert_eq!(shape.midi_notes(Instrument::Guitar), vec![48, 52, 55, 60, 64]);
    }

    #[test]
    fn test_unknown_keeps_name() {
        let chord = ChordDefinition::unknown("Hxyz", Instrument::Guitar);
        assert_eq!(chord.name, "Hxyz");
        assert_eq!(chord.status, ChordStatus::Unknown);
        assert_eq!(chord.root, None);
        assert_eq!(chord.shape.frets.len(), 6);
        assert_eq!(chord.display_name(), "Hxyz");
    }

    #[test]
    fn test_absolute_frets_saturate() {
        let shape = ChordShape { frets: vec![Some(250), None], fingers: vec![0, 0], base_fret: 200 };
        assert_eq!(shape.absolute_frets(), vec![Some(255), None]);
    }
}
