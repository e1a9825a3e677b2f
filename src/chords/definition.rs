//! ChordPro chord definitions
//!
//! Grammar: `NAME [base-fret N] frets F F F ... [fingers N N N ...]`
//!
//! A fret is a number, or `x`/`X`/`N`/`-1` for a muted string. Keywords may
//! appear in any order after the name.

use super::errors::DefinitionError;
use crate::models::{ChordShape, Instrument};

/// A parsed `define` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub shape: ChordShape,
}

const BASE_FRET: &str = "base-fret";
const FRETS: &str = "frets";
const FINGERS: &str = "fingers";

/// Highest fret (and base fret) a definition may use
pub const MAX_FRET: u8 = 24;

fn is_keyword(token: &str) -> bool {
    matches!(token, BASE_FRET | FRETS | FINGERS)
}

fn parse_fret(token: &str) -> Result<Option<u8>, DefinitionError> {
    match token {
        "x" | "X" | "N" | "-1" => Ok(None),
        _ => match token.parse::<u8>() {
            Ok(fret) if fret <= MAX_FRET => Ok(Some(fret)),
            _ => Err(DefinitionError::InvalidFret(token.to_string())),
        },
    }
}

fn parse_finger(token: &str) -> Result<u8, DefinitionError> {
    match token {
        "x" | "X" | "N" | "-" => Ok(0),
        _ => match token.parse::<u8>() {
            Ok(finger) if finger <= 5 => Ok(finger),
            _ => Err(DefinitionError::InvalidFinger(token.to_string())),
        },
    }
}

/// Parse a definition for the given instrument
pub fn parse_definition(text: &str, instrument: Instrument) -> Result<Definition, DefinitionError> {
    let mut tokens = text.split_whitespace().peekable();

    let name = match tokens.next() {
        Some(token) if !is_keyword(token) => token.trim_end_matches(':').to_string(),
        _ => return Err(DefinitionError::MissingName),
    };
    if name.is_empty() {
        return Err(DefinitionError::MissingName);
    }

    let mut base_fret: u8 = 1;
    let mut frets: Vec<Option<u8>> = Vec::new();
    let mut fingers: Vec<u8> = Vec::new();

    while let Some(keyword) = tokens.next() {
        match keyword {
            BASE_FRET => {
                let value = tokens.next().unwrap_or_default();
                base_fret = match value.parse::<u8>() {
                    Ok(fret) if (1..=MAX_FRET).contains(&fret) => fret,
                    _ => return Err(DefinitionError::InvalidBaseFret(value.to_string())),
                };
            }
            FRETS => {
                while let Some(token) = tokens.next_if(|t| !is_keyword(t)) {
                    frets.push(parse_fret(token)?);
                }
            }
            FINGERS => {
                while let Some(token) = tokens.next_if(|t| !is_keyword(t)) {
                    fingers.push(parse_finger(token)?);
                }
            }
            // Unknown keywords (`keys`, `copy`, ...) are skipped with their
            // arguments; only frets and fingers matter for a shape.
            _ => while tokens.next_if(|t| !is_keyword(t)).is_some() {},
        }
    }

    if frets.is_empty() {
        return Err(DefinitionError::MissingFrets(name));
    }

    let strings = instrument.strings();
    if frets.len() != strings {
        return Err(DefinitionError::StringCount {
            expected: strings,
            found: frets.len(),
        });
    }

    if fingers.is_empty() {
        fingers = vec![0; strings];
    } else if fingers.len() != strings {
        return Err(DefinitionError::StringCount {
            expected: strings,
            found: fingers.len(),
        });
    }

    Ok(Definition {
        name,
        shape: ChordShape {
            base_fret,
            frets,
            fingers,
        },
    })
}
