//! # U-Masonry
//!
//! Procedural stone wall layouts.
//!
//! This crate provides:
//! - **Layout engine**: seeded course-by-course tiling of a rectangular wall
//! - **Presets**: named parameter records loaded from `@@` text files
//! - **Export**: versioned JSON documents of a computed layout
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use u_masonry::{LayoutEngine, Parameters, Pattern};
//!
//! let params = Parameters::default()
//!     .with_wall(5000.0, 3000.0)
//!     .with_pattern(Pattern::Running);
//!
//! let layout = LayoutEngine::with_seed(12345).generate(&params)?;
//! println!("{} stones, {} covered", layout.stone_count, layout.utilization_percent());
//! ```
//!
//! ## Feature Flags
//!
//! - `preset` (default): preset file loading
//! - `export` (default): JSON export
//! - `serde`: Serialization support for core types

/// Layout engine and data model.
pub use u_masonry_core as core;

/// Preset file loading.
#[cfg(feature = "preset")]
pub use u_masonry_preset as preset;

/// JSON export.
#[cfg(feature = "export")]
pub use u_masonry_export as export;

// Re-export commonly used types at root level
pub use u_masonry_core::{
    EngineConfig, Error, Layout, LayoutDirection, LayoutEngine, LayoutSummary, Parameters,
    Pattern, Result, SeededSequence, Stone,
};
