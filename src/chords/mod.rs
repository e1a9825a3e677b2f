//! Chord names, chord definitions and the chord-shape database
//!
//! This module answers "what shape is this chord on this instrument":
//! - `name`: chord name parsing (`F#m7/E`)
//! - `definition`: ChordPro `define` bodies
//! - `database`: curated shapes plus lookup entry points
//! - `voicing`: generated shapes for everything else

pub mod database;
pub mod definition;
pub mod errors;
pub mod name;
pub mod voicing;

pub use database::{lookup_by_definition, lookup_by_name, ChordDatabase};
pub use definition::{parse_definition, Definition};
pub use errors::{ChordError, DatabaseError, DefinitionError};
pub use name::ChordName;
