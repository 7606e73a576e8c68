//! Wall and stone parameters.

use crate::sequence::SeededSequence;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest running bond offset applied to a course.
pub const RUNNING_OFFSET_MIN: f64 = 50.0;

/// Largest running bond offset applied to a course.
pub const RUNNING_OFFSET_MAX: f64 = 200.0;

/// Orientation of the courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutDirection {
    /// Horizontal courses stacked bottom to top.
    #[default]
    Horizontal,
    /// Vertical columns laid left to right (transposed courses).
    Vertical,
}

impl LayoutDirection {
    /// Returns the lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutDirection::Horizontal => "horizontal",
            LayoutDirection::Vertical => "vertical",
        }
    }
}

impl fmt::Display for LayoutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(LayoutDirection::Horizontal),
            "vertical" | "v" => Ok(LayoutDirection::Vertical),
            other => Err(Error::UnknownVariant {
                kind: "layout direction",
                value: other.to_string(),
            }),
        }
    }
}

/// Coursing pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pattern {
    /// Running bond: every course after the first starts with a random
    /// negative offset so vertical joints do not line up.
    #[default]
    Running,
    /// Stack bond: courses start flush at the left edge.
    Stack,
    /// Randomized coursing. Variation comes entirely from the randomness
    /// ratio; the course start is flush like stack bond.
    Random,
}

impl Pattern {
    /// All pattern variants.
    pub const ALL: [Pattern; 3] = [Pattern::Running, Pattern::Stack, Pattern::Random];

    /// Returns the lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Running => "running",
            Pattern::Stack => "stack",
            Pattern::Random => "random",
        }
    }

    /// Horizontal start of a course relative to the wall edge.
    ///
    /// Consumes a draw only when the pattern actually offsets the course,
    /// which keeps the draw order of the other patterns unchanged.
    pub fn row_offset(&self, seq: &mut SeededSequence, is_first_row: bool) -> f64 {
        match self {
            Pattern::Running if !is_first_row => {
                -seq.lerp_draw(RUNNING_OFFSET_MIN, RUNNING_OFFSET_MAX)
            }
            Pattern::Running | Pattern::Stack | Pattern::Random => 0.0,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" | "running_bond" | "running-bond" => Ok(Pattern::Running),
            "stack" | "stack_bond" | "stack-bond" => Ok(Pattern::Stack),
            "random" => Ok(Pattern::Random),
            other => Err(Error::UnknownVariant {
                kind: "pattern",
                value: other.to_string(),
            }),
        }
    }
}

/// Input record for one layout computation.
///
/// All lengths share one linear unit (millimeters in the bundled presets).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Parameters {
    /// Wall width.
    pub wall_width: f64,
    /// Wall height.
    pub wall_height: f64,
    /// Smallest base stone width.
    pub stone_min_width: f64,
    /// Largest base stone width.
    pub stone_max_width: f64,
    /// Smallest base course height.
    pub stone_min_height: f64,
    /// Largest base course height.
    pub stone_max_height: f64,
    /// Gap between neighbouring stones in a course.
    pub joint_width: f64,
    /// Gap between courses.
    pub joint_height: f64,
    /// Jitter ratio, nominally in `[0, 1]`.
    pub randomness: f64,
    /// Course orientation.
    pub layout_direction: LayoutDirection,
    /// Coursing pattern.
    #[cfg_attr(feature = "serde", serde(rename = "patternType"))]
    pub pattern: Pattern,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            wall_width: 5000.0,
            wall_height: 3000.0,
            stone_min_width: 200.0,
            stone_max_width: 600.0,
            stone_min_height: 100.0,
            stone_max_height: 300.0,
            joint_width: 10.0,
            joint_height: 10.0,
            randomness: 0.3,
            layout_direction: LayoutDirection::Horizontal,
            pattern: Pattern::Running,
        }
    }
}

impl Parameters {
    /// Creates parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wall size.
    pub fn with_wall(mut self, width: f64, height: f64) -> Self {
        self.wall_width = width;
        self.wall_height = height;
        self
    }

    /// Sets the base stone width range.
    pub fn with_stone_width(mut self, min: f64, max: f64) -> Self {
        self.stone_min_width = min;
        self.stone_max_width = max;
        self
    }

    /// Sets the base course height range.
    pub fn with_stone_height(mut self, min: f64, max: f64) -> Self {
        self.stone_min_height = min;
        self.stone_max_height = max;
        self
    }

    /// Sets the joint sizes.
    pub fn with_joints(mut self, width: f64, height: f64) -> Self {
        self.joint_width = width;
        self.joint_height = height;
        self
    }

    /// Sets the randomness ratio.
    pub fn with_randomness(mut self, randomness: f64) -> Self {
        self.randomness = randomness;
        self
    }

    /// Sets the coursing pattern.
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Sets the course orientation.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Wall area.
    pub fn wall_area(&self) -> f64 {
        self.wall_width * self.wall_height
    }

    /// Swaps the roles of width and height.
    ///
    /// Running the row packer on the transposed parameters and mirroring the
    /// stones back produces vertical columns.
    pub fn transposed(&self) -> Self {
        Self {
            wall_width: self.wall_height,
            wall_height: self.wall_width,
            stone_min_width: self.stone_min_height,
            stone_max_width: self.stone_max_height,
            stone_min_height: self.stone_min_width,
            stone_max_height: self.stone_max_width,
            joint_width: self.joint_height,
            joint_height: self.joint_width,
            ..self.clone()
        }
    }

    /// Checks the values the packing loop relies on to terminate.
    ///
    /// Reversed ranges and values outside the control surface's guidance are
    /// accepted; they only change the shape of the result.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("wall width", self.wall_width),
            ("wall height", self.wall_height),
            ("stone min width", self.stone_min_width),
            ("stone max width", self.stone_max_width),
            ("stone min height", self.stone_min_height),
            ("stone max height", self.stone_max_height),
            ("joint width", self.joint_width),
            ("joint height", self.joint_height),
            ("randomness", self.randomness),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidParameters(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if self.wall_width <= 0.0 || self.wall_height <= 0.0 {
            return Err(Error::InvalidParameters(format!(
                "wall dimensions must be positive, got {}x{}",
                self.wall_width, self.wall_height
            )));
        }

        // A negative joint lets the cursor fall back behind the wall edge
        // after a clipped stone, and the course never ends.
        if self.joint_width < 0.0 || self.joint_height < 0.0 {
            return Err(Error::InvalidParameters(format!(
                "joints must not be negative, got {}x{}",
                self.joint_width, self.joint_height
            )));
        }

        Ok(())
    }
}
