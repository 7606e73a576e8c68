//! # U-Masonry Preset
//!
//! Loader for named wall presets stored in a line-oriented text format.
//!
//! Recognized keys (case-insensitive, with synonyms) fill a
//! [`Parameters`](u_masonry_core::Parameters) record; anything missing or
//! unparseable keeps its default value, so a malformed file degrades to the
//! default wall instead of failing.

mod keys;
mod parser;

pub use keys::PresetKey;
pub use parser::{Preset, PresetError, PresetLoader, RawEntry, LINE_MARKER, PRESET_EXTENSIONS};
