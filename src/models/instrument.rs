//! Instrument (tuning) profiles used for chord-shape lookup

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fretted instrument with a fixed tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Instrument {
    #[default]
    Guitar,
    GuitarDropD,
    Ukulele,
    BaritoneUkulele,
}

impl Instrument {
    pub const ALL: [Instrument; 4] = [
        Instrument::Guitar,
        Instrument::GuitarDropD,
        Instrument::Ukulele,
        Instrument::BaritoneUkulele,
    ];

    /// Identifier used in options objects and the chord database
    pub fn id(&self) -> &'static str {
        match self {
            Instrument::Guitar => "guitar",
            Instrument::GuitarDropD => "guitarDropD",
            Instrument::Ukulele => "ukulele",
            Instrument::BaritoneUkulele => "baritoneUkulele",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Instrument::Guitar => "Guitar, Standard E tuning",
            Instrument::GuitarDropD => "Guitar, Drop D tuning",
            Instrument::Ukulele => "Ukulele, Standard C tuning",
            Instrument::BaritoneUkulele => "Baritone Ukulele, DGBE tuning",
        }
    }

    /// MIDI note of each open string, lowest string first
    ///
    /// The ukulele is re-entrant: its first string (G4) sounds above the
    /// second (C4).
    pub fn tuning(&self) -> &'static [u8] {
        match self {
            Instrument::Guitar => &[40, 45, 50, 55, 59, 64],
            Instrument::GuitarDropD => &[38, 45, 50, 55, 59, 64],
            Instrument::Ukulele => &[67, 60, 64, 69],
            Instrument::BaritoneUkulele => &[50, 55, 59, 64],
        }
    }

    /// Note names of the open strings, for display
    pub fn string_names(&self) -> &'static [&'static str] {
        match self {
            Instrument::Guitar => &["E", "A", "D", "G", "B", "E"],
            Instrument::GuitarDropD => &["D", "A", "D", "G", "B", "E"],
            Instrument::Ukulele => &["G", "C", "E", "A"],
            Instrument::BaritoneUkulele => &["D", "G", "B", "E"],
        }
    }

    /// True when a higher string is tuned below a lower one
    pub fn is_reentrant(&self) -> bool {
        self.tuning().windows(2).any(|pair| pair[1] < pair[0])
    }

    pub fn strings(&self) -> usize {
        self.tuning().len()
    }

    /// Highest fret a generated voicing may start on
    pub fn max_position(&self) -> u8 {
        12
    }

    /// Frets a hand can cover without shifting (window width minus one)
    pub fn max_span(&self) -> u8 {
        3
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Instrument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instrument::ALL
            .iter()
            .find(|instrument| instrument.id().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                format!(
                    "Invalid instrument: '{}'. Expected one of: guitar, guitarDropD, ukulele, baritoneUkulele",
                    s
                )
            })
    }
}
