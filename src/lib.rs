//! ChordPro WASM Module
//!
//! Parses ChordPro song text into a structured song: metadata, typed
//! sections of chord and lyric parts, and the chord shapes the song uses,
//! resolved and transposed for a chosen instrument.

pub mod api;
pub mod chords;
pub mod models;
pub mod parse;
pub mod transposition;

// Re-export commonly used types
pub use models::*;
pub use parse::{parse, ParseOptions};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            wasm_warn!("logger was already initialized");
        }
    }

    log::info!("ChordPro WASM module initialized");
}
