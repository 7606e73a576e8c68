//! # U-Masonry Export
//!
//! JSON export documents for computed layouts.
//!
//! An export carries the input parameters and a position/size projection of
//! every stone (ids and depth are left out), tagged with a schema version and
//! the time the document was produced. It only reads the [`Layout`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use u_masonry_core::{Layout, Parameters, Stone};

/// Schema version written into every document.
pub const SCHEMA_VERSION: &str = "1.0";

/// Errors that can occur when exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize export: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to write export: {0}")]
    IoError(#[from] std::io::Error),
}

/// Position and size of one exported stone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedStone {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&Stone> for ExportedStone {
    fn from(stone: &Stone) -> Self {
        Self {
            x: stone.x,
            y: stone.y,
            width: stone.width,
            height: stone.height,
        }
    }
}

/// Exported layout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Schema version.
    pub version: String,

    /// Creation time, RFC 3339 in UTC.
    pub timestamp: String,

    /// Parameters the layout was computed from.
    pub parameters: Parameters,

    /// Generator seed.
    pub seed: u64,

    /// Stones in generation order.
    pub stones: Vec<ExportedStone>,

    /// Covered area.
    pub total_area: f64,

    /// Number of stones.
    pub stone_count: usize,

    /// Whether generation stopped at a safety limit.
    pub truncated: bool,
}

impl ExportDocument {
    /// Builds a document stamped with the given time.
    pub fn new(parameters: &Parameters, layout: &Layout, timestamp: DateTime<Utc>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            parameters: parameters.clone(),
            seed: layout.seed,
            stones: layout.stones.iter().map(ExportedStone::from).collect(),
            total_area: layout.total_area,
            stone_count: layout.stone_count,
            truncated: layout.truncated,
        }
    }

    /// Builds a document stamped with the current time.
    pub fn now(parameters: &Parameters, layout: &Layout) -> Self {
        Self::new(parameters, layout, Utc::now())
    }

    /// Parses the stored timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Serializes to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes indented JSON to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use u_masonry_core::{LayoutEngine, Pattern};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap()
    }

    #[test]
    fn test_document_projection() {
        let params = Parameters::default().with_wall(1200.0, 400.0);
        let layout = LayoutEngine::default_config().generate(&params).unwrap();
        let doc = ExportDocument::new(&params, &layout, fixed_time());

        assert_eq!(doc.version, SCHEMA_VERSION);
        assert_eq!(doc.timestamp, "2025-03-14T15:09:26.000Z");
        assert_eq!(doc.stones.len(), layout.stone_count);
        assert_eq!(doc.stone_count, layout.stone_count);
        assert_eq!(doc.total_area, layout.total_area);
        assert_eq!(doc.created_at(), Some(fixed_time()));

        for (exported, stone) in doc.stones.iter().zip(&layout.stones) {
            assert_eq!(exported.x, stone.x);
            assert_eq!(exported.height, stone.height);
        }
    }

    #[test]
    fn test_json_field_names() {
        let params = Parameters::default()
            .with_wall(500.0, 100.0)
            .with_pattern(Pattern::Stack);
        let layout = LayoutEngine::default_config().generate(&params).unwrap();
        let json = ExportDocument::new(&params, &layout, fixed_time())
            .to_json_pretty()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], "1.0");
        assert_eq!(value["parameters"]["wallWidth"], 500.0);
        assert_eq!(value["parameters"]["patternType"], "stack");
        assert_eq!(value["parameters"]["layoutDirection"], "horizontal");
        assert!(value["stoneCount"].is_u64());
        let first = &value["stones"][0];
        assert!(first.get("id").is_none());
        assert!(first.get("depth").is_none());
        assert_eq!(first["x"], 0.0);
    }
}
