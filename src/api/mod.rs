//! ChordPro WASM API
//!
//! The JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, `ApiError`, serialization helpers
//! - `types`: plain data returned to JS
//! - `core`: the exported functions

pub mod helpers;
pub mod types;
pub mod core;

pub use self::core::*;
pub use helpers::ApiError;
pub use types::InstrumentInfo;
