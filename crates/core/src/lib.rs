//! # U-Masonry Core
//!
//! Seeded, row-based layout engine for rectangular stone walls.
//!
//! This crate computes a non-overlapping tiling of stones across a wall
//! following a coursing pattern (running bond, stack bond or randomized),
//! with configurable joints and size variation. It neither renders nor
//! persists anything: it consumes a [`Parameters`] record and produces a
//! [`Layout`].
//!
//! ## Core Components
//!
//! - **Sequence generator**: [`SeededSequence`], a fixed linear congruential
//!   recurrence so identical seeds give identical layouts
//! - **Row packer**: [`pack_row`] lays out one course
//! - **Layout assembler**: [`LayoutEngine`] stacks courses up the wall,
//!   trims to the wall boundary and aggregates statistics
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod engine;
pub mod error;
pub mod layout;
pub mod params;
pub mod row;
pub mod sequence;
pub mod stone;

// Re-exports
pub use engine::{
    trim_to_wall, EngineConfig, LayoutEngine, DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_STONES,
};
pub use error::{Error, Result};
pub use layout::{Layout, LayoutSummary};
pub use params::{LayoutDirection, Parameters, Pattern};
pub use row::{pack_row, Row};
pub use sequence::{lerp, SeededSequence, DEFAULT_SEED, MIN_STONE_SIZE};
pub use stone::{Stone, DEFAULT_STONE_DEPTH};
