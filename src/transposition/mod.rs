//! Transposition of chord definitions
//!
//! - `chord_transpose`: moving database and custom chords by semitones
//! - `key_signature`: sharp or flat spelling for a key

pub mod chord_transpose;
pub mod key_signature;

pub use key_signature::prefers_flats;
