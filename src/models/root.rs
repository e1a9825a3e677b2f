/// Enumeration of chord roots (and slash-chord bass notes)
///
/// Represents the 17 spellings used in chord names:
/// - 7 natural roots (C, D, E, F, G, A, B)
/// - 5 sharp roots (C#, D#, F#, G#, A#)
/// - 5 flat roots (Db, Eb, Gb, Ab, Bb)
///
/// Enharmonic equivalents are kept apart (C# and Db) because the spelling
/// is part of the chord's display name. The rarely written Cb, Fb, E# and B#
/// are folded onto their common spelling when parsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chords::ChordError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Root {
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
}

impl Root {
    /// Chromatic scale spelled with sharps, indexed by pitch class
    pub const SHARPS: [Root; 12] = [
        Root::C, Root::Cs, Root::D, Root::Ds, Root::E, Root::F,
        Root::Fs, Root::G, Root::Gs, Root::A, Root::As, Root::B,
    ];

    /// Chromatic scale spelled with flats, indexed by pitch class
    pub const FLATS: [Root; 12] = [
        Root::C, Root::Db, Root::D, Root::Eb, Root::E, Root::F,
        Root::Gb, Root::G, Root::Ab, Root::A, Root::Bb, Root::B,
    ];

    /// Convert root to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Root::C => "C",
            Root::Cs => "C#",
            Root::Db => "Db",
            Root::D => "D",
            Root::Ds => "D#",
            Root::Eb => "Eb",
            Root::E => "E",
            Root::F => "F",
            Root::Fs => "F#",
            Root::Gb => "Gb",
            Root::G => "G",
            Root::Gs => "G#",
            Root::Ab => "Ab",
            Root::A => "A",
            Root::As => "A#",
            Root::Bb => "Bb",
            Root::B => "B",
        }
    }

    /// Pitch class 0-11 (0=C)
    pub fn pitch_class(&self) -> u8 {
        match self {
            Root::C => 0,
            Root::Cs | Root::Db => 1,
            Root::D => 2,
            Root::Ds | Root::Eb => 3,
            Root::E => 4,
            Root::F => 5,
            Root::Fs | Root::Gb => 6,
            Root::G => 7,
            Root::Gs | Root::Ab => 8,
            Root::A => 9,
            Root::As | Root::Bb => 10,
            Root::B => 11,
        }
    }

    pub fn from_pitch_class(pitch_class: u8, flats: bool) -> Root {
        let index = (pitch_class % 12) as usize;
        if flats {
            Self::FLATS[index]
        } else {
            Self::SHARPS[index]
        }
    }

    /// Shift by a signed number of semitones, spelling the result with
    /// flats or sharps
    pub fn transpose(&self, semitones: i32, flats: bool) -> Root {
        let pitch_class = (self.pitch_class() as i32 + semitones.rem_euclid(12)).rem_euclid(12) as u8;
        Self::from_pitch_class(pitch_class, flats)
    }

    /// Split the leading root off a chord name: `"F#m7"` → `(F#, "m7")`
    pub fn split_prefix(s: &str) -> Option<(Root, &str)> {
        let mut chars = s.char_indices();
        let (_, letter) = chars.next()?;
        if !matches!(letter, 'A'..='G') {
            return None;
        }

        // One accidental at most; the accidental glyphs are multi-byte.
        let (spelling_end, accidental) = match chars.next() {
            Some((i, c @ ('#' | '♯' | 'b' | '♭'))) => (i + c.len_utf8(), Some(c)),
            _ => (letter.len_utf8(), None),
        };

        let natural = match letter {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            _ => 11,
        };

        let root = match accidental {
            None => Self::SHARPS[natural as usize],
            Some('#' | '♯') => Self::SHARPS[((natural + 1) % 12) as usize],
            Some(_) => Self::FLATS[((natural + 11) % 12) as usize],
        };

        Some((root, &s[spelling_end..]))
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Root {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Root::split_prefix(s) {
            Some((root, "")) => Ok(root),
            _ => Err(ChordError::InvalidRoot(s.to_string())),
        }
    }
}
