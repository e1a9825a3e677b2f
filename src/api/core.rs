//! JavaScript-facing parser API
//!
//! Each exported function is a thin wrapper over a plain Rust function of
//! the same name in snake case, so the behavior can be tested natively.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize_or_default, serialize, ApiError};
use super::types::InstrumentInfo;
use crate::models::{ChordDefinition, Instrument, Song};
use crate::parse::{parse, ParseOptions};
use crate::{wasm_info, wasm_log};

/// Parse ChordPro text and encode the song as JSON
pub fn song_to_json(text: &str, transpose: i32, instrument: &str) -> Result<String, ApiError> {
    let instrument: Instrument = instrument.parse().map_err(ApiError::InvalidOptions)?;
    let song = parse(text, &ParseOptions::new(transpose, instrument));
    Ok(serde_json::to_string(&song)?)
}

/// Look a chord name up for an instrument
pub fn find_chord(name: &str, instrument: &str) -> Result<Option<ChordDefinition>, ApiError> {
    let instrument: Instrument = instrument.parse().map_err(ApiError::InvalidOptions)?;
    Ok(ChordDefinition::from_name(name.trim(), instrument))
}

pub fn instrument_infos() -> Vec<InstrumentInfo> {
    Instrument::ALL.iter().copied().map(InstrumentInfo::from).collect()
}

/// Parse a song
///
/// # Parameters
/// - `text`: ChordPro source
/// - `options`: `{ transpose?: number, instrument?: string }`, may be omitted
///
/// # Returns
/// The song as a plain JavaScript object
#[wasm_bindgen(js_name = parseSong)]
pub fn parse_song(text: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options: ParseOptions = deserialize_or_default(options, "Failed to read parse options")?;
    wasm_info!(
        "parseSong called: {} bytes, transpose={}, instrument={}",
        text.len(),
        options.transpose,
        options.instrument
    );

    let started = js_sys::Date::now();
    let song: Song = parse(text, &options);
    wasm_log!(
        "  Parsed {} sections, {} chords in {:.1}ms",
        song.sections.len(),
        song.chords.len(),
        js_sys::Date::now() - started
    );

    serialize(&song, "Failed to serialize song")
}

/// Parse a song and return it as a JSON string
#[wasm_bindgen(js_name = parseSongJson)]
pub fn parse_song_json(text: &str, transpose: i32, instrument: &str) -> Result<String, JsValue> {
    wasm_info!("parseSongJson called: {} bytes, transpose={}", text.len(), transpose);
    song_to_json(text, transpose, instrument).map_err(ApiError::into_js)
}

/// Look up a chord shape by name
///
/// # Returns
/// The chord definition, or `undefined` when no shape is known
#[wasm_bindgen(js_name = lookupChord)]
pub fn lookup_chord(name: &str, instrument: &str) -> Result<JsValue, JsValue> {
    match find_chord(name, instrument).map_err(ApiError::into_js)? {
        Some(chord) => serialize(&chord, "Failed to serialize chord"),
        None => {
            wasm_log!("lookupChord: no shape for '{}' on {}", name, instrument);
            Ok(JsValue::UNDEFINED)
        }
    }
}

/// List the supported instruments
#[wasm_bindgen(js_name = listInstruments)]
pub fn list_instruments() -> Result<js_sys::Array, JsValue> {
    let result = js_sys::Array::new();
    for info in instrument_infos() {
        result.push(&serialize(&info, "Failed to serialize instrument")?);
    }
    Ok(result)
}
