//! Parser configuration

use serde::{Deserialize, Serialize};

use crate::models::Instrument;

/// Settings for one parse
///
/// Deserialized from a JavaScript options object; missing fields fall back
/// to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Song-wide transpose in semitones
    pub transpose: i32,
    /// Instrument used for chord-shape lookup
    pub instrument: Instrument,
}

impl ParseOptions {
    pub fn new(transpose: i32, instrument: Instrument) -> Self {
        Self {
            transpose,
            instrument,
        }
    }
}
