//! Placed stone representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display thickness given to every stone.
pub const DEFAULT_STONE_DEPTH: f64 = 100.0;

/// A single placed stone.
///
/// `(x, y)` is the lower-left corner in wall coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stone {
    /// Identifier, unique within one layout (`stone-<n>`).
    pub id: String,
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Visualization thickness; not part of the packing.
    pub depth: f64,
}

impl Stone {
    /// Creates a stone with the sequential id `stone-<index>`.
    pub fn new(index: usize, x: f64, y: f64, width: f64, height: f64, depth: f64) -> Self {
        Self {
            id: format!("stone-{}", index),
            x,
            y,
            width,
            height,
            depth,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge.
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Face area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Mirrors the stone across the wall diagonal (x <-> y).
    pub fn transposed(&self) -> Self {
        Self {
            id: self.id.clone(),
            x: self.y,
            y: self.x,
            width: self.height,
            height: self.width,
            depth: self.depth,
        }
    }
}
