//! Shared types for the WASM API

use serde::{Deserialize, Serialize};

use crate::models::Instrument;

/// Instrument entry for pickers on the JS side
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentInfo {
    pub id: String,
    pub label: String,
    pub strings: usize,
    /// String names, lowest string first
    pub tuning: Vec<String>,
}

impl From<Instrument> for InstrumentInfo {
    fn from(instrument: Instrument) -> Self {
        Self {
            id: instrument.id().to_string(),
            label: instrument.label().to_string(),
            strings: instrument.strings(),
            tuning: instrument
                .string_names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}
