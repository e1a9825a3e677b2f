//! Models module for the ChordPro parser
//!
//! This module contains the song document produced by the parser and
//! the music types (roots, qualities, instruments, chord definitions)
//! it is built from.

pub mod chord;
pub mod instrument;
pub mod quality;
pub mod root;
pub mod song;

// Re-export commonly used types
pub use chord::{ChordDefinition, ChordShape, ChordStatus};
pub use instrument::Instrument;
pub use quality::Quality;
pub use root::Root;
pub use song::*;
