//! Error types for chord names, chord definitions and the chord database
//!
//! None of these reach the song parser's caller: the parser treats every
//! one of them as "no chord produced".

use thiserror::Error;

/// A chord name that could not be understood
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    #[error("Empty chord name")]
    Empty,

    /// The name does not start with A-G plus an optional accidental
    #[error("Invalid chord root: '{0}'")]
    InvalidRoot(String),

    /// The text after the root is not a known chord quality
    #[error("Unknown chord quality: '{0}'")]
    UnknownQuality(String),

    /// The part after the slash is not a note name
    #[error("Invalid bass note: '{0}'")]
    InvalidBass(String),
}

/// A `define` body that could not be turned into a chord shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("Chord definition has no name")]
    MissingName,

    #[error("Chord definition '{0}' has no frets")]
    MissingFrets(String),

    #[error("Invalid fret: '{0}'")]
    InvalidFret(String),

    #[error("Invalid base fret: '{0}'")]
    InvalidBaseFret(String),

    #[error("Invalid finger: '{0}'")]
    InvalidFinger(String),

    /// Frets (or fingers) do not match the instrument's string count
    #[error("Expected {expected} strings, found {found}")]
    StringCount { expected: usize, found: usize },
}

/// The embedded chord table failed to load
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Chord database is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid chord database entry for {instrument}: '{entry}': {source}")]
    InvalidEntry {
        instrument: String,
        entry: String,
        #[source]
        source: DefinitionError,
    },
}
