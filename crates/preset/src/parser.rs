//! Preset text format parser.
//!
//! Parameter lines start with `@@`, followed by a key and its values:
//!
//! ```text
//! @@name;Dry stone wall
//! @@wall_width;6000
//! @@stone_width;250;700
//! @@joint#8
//! @@pattern running
//! ```
//!
//! The key ends at the first `;` (or at the first whitespace when the line
//! has no `;`). Values are separated by `;`, `#` or whitespace. Every other
//! line is ignored.

use crate::keys::PresetKey;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use u_masonry_core::{LayoutDirection, Parameters, Pattern};

/// Marker that starts a parameter line.
pub const LINE_MARKER: &str = "@@";

/// File extensions picked up by [`PresetLoader::load_dir`].
pub const PRESET_EXTENSIONS: &[&str] = &["oob", "txt"];

/// Errors that can occur when loading presets.
///
/// Content never fails to parse; only reading files can.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Failed to read preset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// A named parameter record loaded from text.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Display name.
    pub name: String,
    /// Parameters, defaults filled in for anything missing.
    pub parameters: Parameters,
    /// Keys that were present but not recognized, in file order.
    pub ignored_keys: Vec<String>,
}

/// One `@@` line split into key and raw values.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    /// Key as written.
    pub key: String,
    /// Values as written, empty tokens removed.
    pub values: Vec<String>,
}

/// Loader for preset files.
#[derive(Debug, Default)]
pub struct PresetLoader;

impl PresetLoader {
    /// Creates a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Splits content into its `@@` entries.
    pub fn entries(&self, content: &str) -> Vec<RawEntry> {
        content
            .lines()
            .map(str::trim)
            .filter_map(|line| line.strip_prefix(LINE_MARKER))
            .filter_map(split_entry)
            .collect()
    }

    /// Parses preset content. `fallback_name` is used without an `@@name` line.
    pub fn parse_str(&self, fallback_name: &str, content: &str) -> Preset {
        let mut preset = Preset {
            name: fallback_name.to_string(),
            parameters: Parameters::default(),
            ignored_keys: Vec::new(),
        };

        for entry in self.entries(content) {
            match PresetKey::lookup(&entry.key) {
                Some(key) => apply(&mut preset, key, &entry.values),
                None => {
                    log::debug!("Ignoring unknown preset key {:?}", entry.key);
                    preset.ignored_keys.push(entry.key);
                }
            }
        }

        preset
    }

    /// Parses a preset file, named after its stem unless it names itself.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Preset, PresetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(self.parse_str(&stem, &content))
    }

    /// Loads every preset file in a directory, sorted by name.
    ///
    /// Unreadable files are skipped with a warning.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> Result<Vec<Preset>, PresetError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(PresetError::NotADirectory(dir.to_path_buf()));
        }

        let read_dir = fs::read_dir(dir).map_err(|source| PresetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut presets = Vec::new();
        for entry in read_dir.flatten() {
            let path = entry.path();
            if !path.is_file() || !has_preset_extension(&path) {
                continue;
            }
            match self.parse_file(&path) {
                Ok(preset) => presets.push(preset),
                Err(e) => log::warn!("Skipping preset: {}", e),
            }
        }

        presets.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(presets)
    }
}

fn has_preset_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PRESET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

fn is_separator(c: char) -> bool {
    c == ';' || c == '#' || c.is_whitespace()
}

fn split_entry(rest: &str) -> Option<RawEntry> {
    let (key, values) = match rest.find(';') {
        Some(pos) => (&rest[..pos], &rest[pos + 1..]),
        None => match rest.trim_start().find(char::is_whitespace) {
            Some(pos) => rest.trim_start().split_at(pos),
            None => (rest, ""),
        },
    };

    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let values = values
        .split(is_separator)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect();

    Some(RawEntry {
        key: key.to_string(),
        values,
    })
}

/// Numeric values of an entry, skipping tokens that do not parse.
fn numbers(values: &[String]) -> Vec<f64> {
    values
        .iter()
        .filter_map(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect()
}

/// Applies `(first, second)` where a single value fills both slots.
fn pair(values: &[String]) -> Option<(f64, f64)> {
    let nums = numbers(values);
    match nums.as_slice() {
        [] => None,
        [single] => Some((*single, *single)),
        [first, second, ..] => Some((*first, *second)),
    }
}

fn apply(preset: &mut Preset, key: PresetKey, values: &[String]) {
    let params = &mut preset.parameters;
    let first = numbers(values).first().copied();

    match key {
        PresetKey::Name => {
            if !values.is_empty() {
                preset.name = values.join(" ");
            }
        }
        PresetKey::WallWidth => set(&mut params.wall_width, first),
        PresetKey::WallHeight => set(&mut params.wall_height, first),
        PresetKey::StoneMinWidth => set(&mut params.stone_min_width, first),
        PresetKey::StoneMaxWidth => set(&mut params.stone_max_width, first),
        PresetKey::StoneMinHeight => set(&mut params.stone_min_height, first),
        PresetKey::StoneMaxHeight => set(&mut params.stone_max_height, first),
        PresetKey::JointWidth => set(&mut params.joint_width, first),
        PresetKey::JointHeight => set(&mut params.joint_height, first),
        PresetKey::WallSize => {
            if let Some((w, h)) = pair(values) {
                params.wall_width = w;
                params.wall_height = h;
            }
        }
        PresetKey::StoneWidth => {
            if let Some((min, max)) = pair(values) {
                params.stone_min_width = min;
                params.stone_max_width = max;
            }
        }
        PresetKey::StoneHeight => {
            if let Some((min, max)) = pair(values) {
                params.stone_min_height = min;
                params.stone_max_height = max;
            }
        }
        PresetKey::Joint => {
            if let Some((w, h)) = pair(values) {
                params.joint_width = w;
                params.joint_height = h;
            }
        }
        PresetKey::Randomness => {
            if let Some(r) = first {
                params.randomness = if r > 1.0 { r / 100.0 } else { r };
            }
        }
        PresetKey::Pattern => {
            if let Some(pattern) = values.iter().find_map(|v| parse_pattern(v)) {
                params.pattern = pattern;
            }
        }
        PresetKey::Direction => {
            if let Some(direction) = values.iter().find_map(|v| parse_direction(v)) {
                params.layout_direction = direction;
            }
        }
    }
}

fn set(field: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *field = v;
    }
}

fn parse_pattern(value: &str) -> Option<Pattern> {
    match value.trim() {
        "0" => Some(Pattern::Running),
        "1" => Some(Pattern::Stack),
        "2" => Some(Pattern::Random),
        word => word.parse().ok(),
    }
}

fn parse_direction(value: &str) -> Option<LayoutDirection> {
    match value.trim() {
        "0" => Some(LayoutDirection::Horizontal),
        "1" => Some(LayoutDirection::Vertical),
        word => word.parse().ok(),
    }
}
