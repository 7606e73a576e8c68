//! Layout result representation.

use crate::params::{LayoutDirection, Pattern};
use crate::stone::Stone;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one layout computation.
///
/// Stones are kept in generation order: course by course, and left to
/// right (bottom to top for vertical layouts) within a course.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Layout {
    /// Placed stones after boundary trimming.
    pub stones: Vec<Stone>,

    /// Sum of `width * height` over `stones`.
    pub total_area: f64,

    /// Number of stones in `stones`.
    pub stone_count: usize,

    /// Whether generation stopped at a safety limit before the wall was
    /// covered.
    pub truncated: bool,

    /// Number of courses generated.
    pub row_count: usize,

    /// Seed the generator was created with.
    pub seed: u64,

    /// Wall width the layout was computed for.
    pub wall_width: f64,

    /// Wall height the layout was computed for.
    pub wall_height: f64,

    /// Course orientation.
    pub direction: LayoutDirection,

    /// Coursing pattern.
    pub pattern: Pattern,
}

impl Layout {
    /// Builds a layout from trimmed stones, computing the aggregates.
    pub(crate) fn from_stones(stones: Vec<Stone>, wall_width: f64, wall_height: f64) -> Self {
        let total_area = stones.iter().map(Stone::area).sum();
        let stone_count = stones.len();
        Self {
            stones,
            total_area,
            stone_count,
            truncated: false,
            row_count: 0,
            seed: 0,
            wall_width,
            wall_height,
            direction: LayoutDirection::default(),
            pattern: Pattern::default(),
        }
    }

    /// Returns true if the wall was covered without hitting a limit.
    pub fn is_complete(&self) -> bool {
        !self.truncated
    }

    /// Returns true if no stone was placed.
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Fraction of the wall face covered by stones.
    pub fn utilization(&self) -> f64 {
        let wall_area = self.wall_width * self.wall_height;
        if wall_area > 0.0 {
            self.total_area / wall_area
        } else {
            0.0
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }

    /// Stones in stable generation order, `size` at a time.
    ///
    /// Meant for consumers that build their scene across several frames.
    /// A `size` of zero is treated as one.
    pub fn batches(&self, size: usize) -> std::slice::Chunks<'_, Stone> {
        self.stones.chunks(size.max(1))
    }

    /// Groups consecutive stones that belong to the same course.
    pub fn courses(&self) -> Vec<&[Stone]> {
        let same_course = |a: &Stone, b: &Stone| match self.direction {
            LayoutDirection::Horizontal => a.y == b.y && a.height == b.height,
            LayoutDirection::Vertical => a.x == b.x && a.width == b.width,
        };

        let mut courses = Vec::new();
        let mut start = 0;
        for i in 1..=self.stones.len() {
            if i == self.stones.len() || !same_course(&self.stones[i - 1], &self.stones[i]) {
                if start < i {
                    courses.push(&self.stones[start..i]);
                }
                start = i;
            }
        }
        courses
    }

    /// Looks up a stone by id.
    pub fn stone(&self, id: &str) -> Option<&Stone> {
        self.stones.iter().find(|s| s.id == id)
    }
}

/// Summary statistics for a layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutSummary {
    /// Stones placed.
    pub stone_count: usize,
    /// Courses generated.
    pub row_count: usize,
    /// Covered area.
    pub total_area: f64,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Whether a safety limit stopped generation.
    pub truncated: bool,
    /// Generator seed.
    pub seed: u64,
    /// Pattern name.
    pub pattern: String,
}

impl From<&Layout> for LayoutSummary {
    fn from(layout: &Layout) -> Self {
        Self {
            stone_count: layout.stone_count,
            row_count: layout.row_count,
            total_area: layout.total_area,
            utilization_percent: layout.utilization() * 100.0,
            truncated: layout.truncated,
            seed: layout.seed,
            pattern: layout.pattern.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_layout() -> Layout {
        let stones = vec![
            Stone::new(0, 0.0, 0.0, 100.0, 50.0, 100.0),
            Stone::new(1, 110.0, 0.0, 90.0, 50.0, 100.0),
            Stone::new(2, 0.0, 60.0, 120.0, 40.0, 100.0),
        ];
        Layout::from_stones(stones, 200.0, 100.0)
    }

    #[test]
    fn test_aggregates() {
        let layout = sample_layout();
        assert_eq!(layout.stone_count, 3);
        assert_relative_eq!(layout.total_area, 5000.0 + 4500.0 + 4800.0);
        assert_relative_eq!(layout.utilization(), 14300.0 / 20000.0);
        assert_eq!(layout.utilization_percent(), "71.5%");
        assert!(layout.is_complete());
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::from_stones(Vec::new(), 100.0, 100.0);
        assert!(layout.is_empty());
        assert_eq!(layout.total_area, 0.0);
        assert!(layout.courses().is_empty());
        assert_eq!(layout.batches(10).count(), 0);
    }

    #[test]
    fn test_batches_keep_order() {
        let layout = sample_layout();
        let ids: Vec<&str> = layout
            .batches(2)
            .flat_map(|batch| batch.iter().map(|s| s.id.as_str()))
            .collect();
        assert_eq!(ids, vec!["stone-0", "stone-1", "stone-2"]);
        assert_eq!(layout.batches(2).count(), 2);
        assert_eq!(layout.batches(0).count(), 3);
    }

    #[test]
    fn test_courses() {
        let layout = sample_layout();
        let courses = layout.courses();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].len(), 2);
        assert_eq!(courses[1][0].id, "stone-2");
    }

    #[test]
    fn test_stone_lookup() {
        let layout = sample_layout();
        assert_eq!(layout.stone("stone-1").map(|s| s.x), Some(110.0));
        assert!(layout.stone("stone-9").is_none());
    }

    #[test]
    fn test_summary() {
        let mut layout = sample_layout();
        layout.row_count = 2;
        layout.seed = 12345;
        layout.truncated = true;

        let summary = LayoutSummary::from(&layout);
        assert_eq!(summary.stone_count, 3);
        assert_eq!(summary.row_count, 2);
        assert!(summary.truncated);
        assert_eq!(summary.pattern, "running");
        assert_relative_eq!(summary.utilization_percent, 71.5, epsilon = 1e-9);
    }
}
