//! Chord qualities
//!
//! A closed set of chord types with their spelling aliases and the
//! intervals (semitones above the root) that make them up.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Quality {
    Major,
    Minor,
    Seventh,
    MajorSeventh,
    MinorSeventh,
    Sixth,
    MinorSixth,
    Ninth,
    MinorNinth,
    MajorNinth,
    AddNine,
    SuspendedSecond,
    SuspendedFourth,
    SeventhSuspendedFourth,
    Diminished,
    DiminishedSeventh,
    HalfDiminished,
    Augmented,
    Power,
    Eleventh,
    Thirteenth,
}

/// Accepted suffix spellings, matched exactly (case matters: `M7` is major
/// seventh, `m7` is minor seventh)
const SUFFIX_ALIASES: &[(&str, Quality)] = &[
    ("", Quality::Major),
    ("maj", Quality::Major),
    ("M", Quality::Major),
    ("m", Quality::Minor),
    ("min", Quality::Minor),
    ("-", Quality::Minor),
    ("7", Quality::Seventh),
    ("maj7", Quality::MajorSeventh),
    ("M7", Quality::MajorSeventh),
    ("ma7", Quality::MajorSeventh),
    ("Δ", Quality::MajorSeventh),
    ("m7", Quality::MinorSeventh),
    ("min7", Quality::MinorSeventh),
    ("-7", Quality::MinorSeventh),
    ("6", Quality::Sixth),
    ("m6", Quality::MinorSixth),
    ("min6", Quality::MinorSixth),
    ("9", Quality::Ninth),
    ("m9", Quality::MinorNinth),
    ("min9", Quality::MinorNinth),
    ("maj9", Quality::MajorNinth),
    ("M9", Quality::MajorNinth),
    ("add9", Quality::AddNine),
    ("add2", Quality::AddNine),
    ("sus2", Quality::SuspendedSecond),
    ("sus4", Quality::SuspendedFourth),
    ("sus", Quality::SuspendedFourth),
    ("7sus4", Quality::SeventhSuspendedFourth),
    ("7sus", Quality::SeventhSuspendedFourth),
    ("dim", Quality::Diminished),
    ("°", Quality::Diminished),
    ("o", Quality::Diminished),
    ("dim7", Quality::DiminishedSeventh),
    ("°7", Quality::DiminishedSeventh),
    ("o7", Quality::DiminishedSeventh),
    ("m7b5", Quality::HalfDiminished),
    ("m7♭5", Quality::HalfDiminished),
    ("ø", Quality::HalfDiminished),
    ("aug", Quality::Augmented),
    ("+", Quality::Augmented),
    ("5", Quality::Power),
    ("11", Quality::Eleventh),
    ("13", Quality::Thirteenth),
];

/// Perfect fifth, the tone dropped first when strings run short
const FIFTH: u8 = 7;

impl Quality {
    pub fn from_suffix(suffix: &str) -> Option<Quality> {
        SUFFIX_ALIASES
            .iter()
            .find(|(alias, _)| *alias == suffix)
            .map(|(_, quality)| *quality)
    }

    /// Canonical suffix used when the chord name is rebuilt
    pub fn suffix(&self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Seventh => "7",
            Quality::MajorSeventh => "maj7",
            Quality::MinorSeventh => "m7",
            Quality::Sixth => "6",
            Quality::MinorSixth => "m6",
            Quality::Ninth => "9",
            Quality::MinorNinth => "m9",
            Quality::MajorNinth => "maj9",
            Quality::AddNine => "add9",
            Quality::SuspendedSecond => "sus2",
            Quality::SuspendedFourth => "sus4",
            Quality::SeventhSuspendedFourth => "7sus4",
            Quality::Diminished => "dim",
            Quality::DiminishedSeventh => "dim7",
            Quality::HalfDiminished => "m7b5",
            Quality::Augmented => "aug",
            Quality::Power => "5",
            Quality::Eleventh => "11",
            Quality::Thirteenth => "13",
        }
    }

    /// Semitone intervals above the root, root first
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            Quality::Major => &[0, 4, 7],
            Quality::Minor => &[0, 3, 7],
            Quality::Seventh => &[0, 4, 7, 10],
            Quality::MajorSeventh => &[0, 4, 7, 11],
            Quality::MinorSeventh => &[0, 3, 7, 10],
            Quality::Sixth => &[0, 4, 7, 9],
            Quality::MinorSixth => &[0, 3, 7, 9],
            Quality::Ninth => &[0, 4, 7, 10, 2],
            Quality::MinorNinth => &[0, 3, 7, 10, 2],
            Quality::MajorNinth => &[0, 4, 7, 11, 2],
            Quality::AddNine => &[0, 4, 7, 2],
            Quality::SuspendedSecond => &[0, 2, 7],
            Quality::SuspendedFourth => &[0, 5, 7],
            Quality::SeventhSuspendedFourth => &[0, 5, 7, 10],
            Quality::Diminished => &[0, 3, 6],
            Quality::DiminishedSeventh => &[0, 3, 6, 9],
            Quality::HalfDiminished => &[0, 3, 6, 10],
            Quality::Augmented => &[0, 4, 8],
            Quality::Power => &[0, 7],
            // Third omitted, as usually voiced
            Quality::Eleventh => &[0, 7, 10, 2, 5],
            // Fifth and ninth omitted
            Quality::Thirteenth => &[0, 4, 10, 9],
        }
    }

    /// Intervals a voicing must contain. Chords of four or more tones may
    /// drop the perfect fifth.
    pub fn required_intervals(&self) -> Vec<u8> {
        let intervals = self.intervals();
        if intervals.len() >= 4 {
            intervals.iter().copied().filter(|&i| i != FIFTH).collect()
        } else {
            intervals.to_vec()
        }
    }
}
