//! Semitone transposition of chord definitions
//!
//! Database chords are renamed and looked up again in the new key; custom
//! (defined) chords keep their name and have their shape moved up the neck.

use super::key_signature::prefers_flats;
use crate::chords::{self, voicing::shift_shape, ChordName};
use crate::models::{ChordDefinition, ChordStatus, Root};

impl ChordDefinition {
    /// Transpose a database chord by `semitones`, spelling against `scale`
    ///
    /// The name is rebuilt from the new root, the suffix as written and the
    /// new bass. Unknown chords are left as they are.
    pub fn transpose(&mut self, semitones: i32, scale: Root) {
        if semitones == 0 || self.status == ChordStatus::Unknown {
            return;
        }
        let Some(root) = self.root else {
            return;
        };

        let flats = prefers_flats(scale);
        let root = root.transpose(semitones, flats);
        let bass = self.bass.map(|bass| bass.transpose(semitones, flats));
        let name = ChordName::compose(root, &self.suffix, bass);

        log::trace!("transposed {} by {} to {}", self.name, semitones, name);

        self.shape = chords::lookup_by_name(&name, self.instrument)
            .unwrap_or_else(|| shift_shape(&self.shape, semitones));
        self.name = name;
        self.root = Some(root);
        self.bass = bass;
        self.status = ChordStatus::Transposed;
    }

    /// Transpose a defined chord: the name stays, the pitch and shape move
    pub fn transpose_custom(&mut self, semitones: i32, scale: Root) {
        if semitones == 0 {
            return;
        }

        let flats = prefers_flats(scale);
        self.root = self.root.map(|root| root.transpose(semitones, flats));
        self.bass = self.bass.map(|bass| bass.transpose(semitones, flats));
        self.shape = shift_shape(&self.shape, semitones);
        self.status = ChordStatus::CustomTransposed;
    }
}
