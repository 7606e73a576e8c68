//! Layout assembler: drives the row packer across the wall.

use crate::layout::Layout;
use crate::params::{LayoutDirection, Parameters};
use crate::row::pack_row;
use crate::sequence::{SeededSequence, DEFAULT_SEED, MIN_STONE_SIZE};
use crate::stone::{Stone, DEFAULT_STONE_DEPTH};
use crate::{Error, Result};

use rayon::prelude::*;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default cap on placed stones.
pub const DEFAULT_MAX_STONES: usize = 10_000;

/// Default cap on candidate slots walked (placed and discarded).
pub const DEFAULT_MAX_CANDIDATES: usize = 100_000;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Seed for the per-layout sequence generator.
    pub seed: u64,

    /// Generation stops before a course would push the stone count past
    /// this limit.
    pub max_stones: usize,

    /// Generation stops before a course would push the number of walked
    /// candidate slots past this limit. Bounds the work spent on courses
    /// whose stones are all too narrow to place.
    pub max_candidates: usize,

    /// Display thickness assigned to every stone.
    pub stone_depth: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_stones: DEFAULT_MAX_STONES,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            stone_depth: DEFAULT_STONE_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the stone limit.
    pub fn with_max_stones(mut self, max_stones: usize) -> Self {
        self.max_stones = max_stones;
        self
    }

    /// Sets the candidate slot limit.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Sets the stone display depth.
    pub fn with_stone_depth(mut self, depth: f64) -> Self {
        self.stone_depth = depth;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_stones == 0 || self.max_candidates == 0 {
            return Err(Error::ConfigError("limits must be at least 1".into()));
        }
        if !self.stone_depth.is_finite() || self.stone_depth <= 0.0 {
            return Err(Error::ConfigError(format!(
                "stone depth must be positive, got {}",
                self.stone_depth
            )));
        }
        Ok(())
    }
}

/// Computes stone layouts.
///
/// Each call to [`LayoutEngine::generate`] creates its own generator from
/// the configured seed, so repeated calls with the same parameters return
/// identical layouts and one engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: EngineConfig,
}

impl LayoutEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Creates an engine with the default configuration and seed.
    pub fn default_config() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Creates an engine with the default configuration and a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig::default().with_seed(seed))
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes a layout with a fresh generator.
    pub fn generate(&self, params: &Parameters) -> Result<Layout> {
        let mut seq = SeededSequence::new(self.config.seed);
        self.generate_with(params, &mut seq)
    }

    /// Computes a layout drawing from a caller-owned generator.
    ///
    /// The generator is advanced; passing it to a second call continues the
    /// sequence rather than repeating the layout.
    pub fn generate_with(&self, params: &Parameters, seq: &mut SeededSequence) -> Result<Layout> {
        self.config.validate()?;
        params.validate()?;

        let start = Instant::now();
        let seed = seq.seed();

        let mut layout = match params.layout_direction {
            LayoutDirection::Horizontal => self.assemble(params, seq),
            LayoutDirection::Vertical => {
                let mut layout = self.assemble(&params.transposed(), seq);
                for stone in &mut layout.stones {
                    *stone = stone.transposed();
                }
                std::mem::swap(&mut layout.wall_width, &mut layout.wall_height);
                layout
            }
        };
        layout.seed = seed;
        layout.direction = params.layout_direction;
        layout.pattern = params.pattern;

        log::debug!(
            "Layout {}x{} ({}, {}): {} stones in {} courses, {} covered, {}ms",
            params.wall_width,
            params.wall_height,
            params.pattern,
            params.layout_direction,
            layout.stone_count,
            layout.row_count,
            layout.utilization_percent(),
            start.elapsed().as_millis()
        );

        Ok(layout)
    }

    /// Computes one independent layout per seed, in parallel.
    ///
    /// Results are returned in the order of `seeds`.
    pub fn generate_many(&self, params: &Parameters, seeds: &[u64]) -> Vec<Result<Layout>> {
        seeds
            .par_iter()
            .map(|&seed| {
                let engine = LayoutEngine::new(self.config.clone().with_seed(seed));
                engine.generate(params)
            })
            .collect()
    }

    /// Runs the course loop in course space (courses run along x).
    fn assemble(&self, params: &Parameters, seq: &mut SeededSequence) -> Layout {
        let mut stones: Vec<Stone> = Vec::new();
        let mut current_y = 0.0;
        let mut next_id = 0;
        let mut row_count = 0;
        let mut candidates = 0;
        let mut truncated = false;

        while current_y < params.wall_height {
            let row = pack_row(
                params,
                seq,
                current_y,
                next_id,
                row_count == 0,
                self.config.stone_depth,
            );

            // Only whole courses are kept.
            if stones.len() + row.stones.len() > self.config.max_stones
                || candidates + row.candidates > self.config.max_candidates
            {
                log::warn!(
                    "Layout truncated at course {} (y = {}): {} stones, {} candidates would exceed limits ({} / {})",
                    row_count,
                    current_y,
                    stones.len() + row.stones.len(),
                    candidates + row.candidates,
                    self.config.max_stones,
                    self.config.max_candidates
                );
                truncated = true;
                break;
            }

            candidates += row.candidates;
            current_y = row.next_y;
            next_id = row.next_id;
            row_count += 1;
            stones.extend(row.stones);
        }

        let trimmed = trim_to_wall(stones, params.wall_width, params.wall_height);

        let mut layout = Layout::from_stones(trimmed, params.wall_width, params.wall_height);
        layout.truncated = truncated;
        layout.row_count = row_count;
        layout
    }
}

/// Drops stones starting at or beyond the right or top wall edge.
///
/// A stone that starts left of the wall is clipped to start at zero; if
/// nothing wider than [`MIN_STONE_SIZE`] remains it is dropped as well.
pub fn trim_to_wall(stones: Vec<Stone>, wall_width: f64, wall_height: f64) -> Vec<Stone> {
    stones
        .into_iter()
        .filter(|s| s.x < wall_width && s.y < wall_height)
        .filter_map(|mut s| {
            if s.x < 0.0 {
                let visible = s.right();
                if visible <= MIN_STONE_SIZE {
                    return None;
                }
                s.x = 0.0;
                s.width = visible;
            }
            Some(s)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Pattern;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_engine_covers_wall() {
        let engine = LayoutEngine::default_config();
        let layout = engine.generate(&Parameters::default()).unwrap();

        assert!(!layout.truncated);
        assert!(layout.stone_count > 0);
        assert!(layout.row_count > 1);
        assert_eq!(layout.seed, DEFAULT_SEED);
        assert!(layout.utilization() > 0.5 && layout.utilization() <= 1.0);
    }

    #[test]
    fn test_repeated_generate_identical() {
        let engine = LayoutEngine::with_seed(2024);
        let params = Parameters::default().with_randomness(0.7);
        let a = engine.generate(&params).unwrap();
        let b = engine.generate(&params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_with_continues_sequence() {
        let engine = LayoutEngine::default_config();
        let params = Parameters::default();
        let mut seq = SeededSequence::default();
        let a = engine.generate_with(&params, &mut seq).unwrap();
        let b = engine.generate_with(&params, &mut seq).unwrap();
        assert_ne!(a.stones, b.stones);
        assert_eq!(a, engine.generate(&params).unwrap());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let engine = LayoutEngine::default_config();
        let params = Parameters::default().with_wall(0.0, 100.0);
        assert!(matches!(
            engine.generate(&params),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let engine = LayoutEngine::new(EngineConfig::default().with_max_stones(0));
        assert!(matches!(
            engine.generate(&Parameters::default()),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_truncation_keeps_whole_courses() {
        let engine = LayoutEngine::new(EngineConfig::default().with_max_stones(25));
        let params = Parameters::default()
            .with_wall(1000.0, 1000.0)
            .with_stone_width(100.0, 100.0)
            .with_stone_height(50.0, 50.0)
            .with_joints(0.0, 0.0)
            .with_randomness(0.0)
            .with_pattern(Pattern::Stack);

        let layout = engine.generate(&params).unwrap();
        assert!(layout.truncated);
        assert!(!layout.is_complete());
        assert_eq!(layout.stone_count, 20);
        assert_eq!(layout.row_count, 2);
    }

    #[test]
    fn test_trim_clips_left_edge() {
        let stones = vec![
            Stone::new(0, -150.0, 0.0, 200.0, 50.0, 100.0),
            Stone::new(1, -150.0, 60.0, 160.0, 50.0, 100.0),
            Stone::new(2, 60.0, 0.0, 100.0, 50.0, 100.0),
            Stone::new(3, 500.0, 0.0, 100.0, 50.0, 100.0),
            Stone::new(4, 0.0, 400.0, 100.0, 50.0, 100.0),
        ];
        let trimmed = trim_to_wall(stones, 500.0, 400.0);

        assert_eq!(trimmed.len(), 2);
        assert_eq!(trimmed[0].id, "stone-0");
        assert_relative_eq!(trimmed[0].x, 0.0);
        assert_relative_eq!(trimmed[0].width, 50.0);
        assert_eq!(trimmed[1].id, "stone-2");
    }

    #[test]
    fn test_vertical_is_transposed_horizontal() {
        let engine = LayoutEngine::with_seed(9);
        let params = Parameters::default()
            .with_wall(2000.0, 3000.0)
            .with_direction(LayoutDirection::Vertical);

        let vertical = engine.generate(&params).unwrap();
        let horizontal = engine
            .generate(&params.transposed().with_direction(LayoutDirection::Horizontal))
            .unwrap();

        assert_eq!(vertical.stone_count, horizontal.stone_count);
        assert_eq!(vertical.wall_width, 2000.0);
        assert_eq!(vertical.wall_height, 3000.0);
        for (v, h) in vertical.stones.iter().zip(&horizontal.stones) {
            assert_eq!(v, &h.transposed());
        }
    }

    #[test]
    fn test_generate_many_matches_sequential() {
        let engine = LayoutEngine::default_config();
        let params = Parameters::default().with_wall(2000.0, 1000.0);
        let seeds = [1, 2, 3, 4];

        let parallel = engine.generate_many(&params, &seeds);
        assert_eq!(parallel.len(), 4);
        for (seed, result) in seeds.iter().zip(parallel) {
            let layout = result.unwrap();
            assert_eq!(layout.seed, *seed);
            assert_eq!(layout, LayoutEngine::with_seed(*seed).generate(&params).unwrap());
        }
    }
}
