//! Read-only chord-shape database
//!
//! Curated shapes come from the embedded `database.yaml`; anything else is
//! voiced on demand. The table is parsed once and never mutated, so lookups
//! need no synchronisation.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::definition::parse_definition;
use super::errors::DatabaseError;
use super::name::ChordName;
use super::voicing::find_voicing;
use crate::models::{ChordShape, Instrument};

const EMBEDDED_DATABASE: &str = include_str!("database.yaml");

static DATABASE: Lazy<ChordDatabase> = Lazy::new(|| {
    ChordDatabase::from_yaml(EMBEDDED_DATABASE).unwrap_or_else(|err| {
        log::error!("failed to load the embedded chord database: {}", err);
        ChordDatabase::default()
    })
});

/// Curated shapes keyed by instrument and canonical chord name
#[derive(Debug, Default)]
pub struct ChordDatabase {
    shapes: HashMap<(Instrument, String), ChordShape>,
}

impl ChordDatabase {
    pub fn from_yaml(yaml: &str) -> Result<Self, DatabaseError> {
        let raw: HashMap<Instrument, Vec<String>> = serde_yaml::from_str(yaml)?;

        let mut shapes = HashMap::new();
        for (instrument, entries) in raw {
            for entry in entries {
                let definition = parse_definition(&entry, instrument).map_err(|source| {
                    DatabaseError::InvalidEntry {
                        instrument: instrument.id().to_string(),
                        entry: entry.clone(),
                        source,
                    }
                })?;
                shapes.insert((instrument, definition.name), definition.shape);
            }
        }

        log::debug!("chord database loaded with {} curated shapes", shapes.len());
        Ok(Self { shapes })
    }

    pub fn curated(&self, name: &str, instrument: Instrument) -> Option<&ChordShape> {
        self.shapes.get(&(instrument, name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shape for a chord name: curated first, then a generated voicing
    pub fn lookup_by_name(&self, name: &str, instrument: Instrument) -> Option<ChordShape> {
        let chord: ChordName = match name.parse() {
            Ok(chord) => chord,
            Err(err) => {
                log::debug!("not a chord name '{}': {}", name, err);
                return None;
            }
        };

        if let Some(shape) = self.curated(&chord.canonical(), instrument) {
            return Some(shape.clone());
        }
        find_voicing(&chord, instrument)
    }

    /// Shape from a `define` body
    pub fn lookup_by_definition(&self, text: &str, instrument: Instrument) -> Option<ChordShape> {
        match parse_definition(text, instrument) {
            Ok(definition) => Some(definition.shape),
            Err(err) => {
                log::debug!("invalid chord definition '{}': {}", text, err);
                None
            }
        }
    }
}

/// Look a chord name up in the embedded database
pub fn lookup_by_name(name: &str, instrument: Instrument) -> Option<ChordShape> {
    DATABASE.lookup_by_name(name, instrument)
}

/// Parse a chord definition against the embedded database's instrument rules
pub fn lookup_by_definition(text: &str, instrument: Instrument) -> Option<ChordShape> {
    DATABASE.lookup_by_definition(text, instrument)
}
