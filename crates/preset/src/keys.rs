//! Recognized preset keys and their synonyms.

/// Parameter a preset line can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetKey {
    /// Preset display name.
    Name,
    /// Wall width.
    WallWidth,
    /// Wall height.
    WallHeight,
    /// Wall width and height in one line.
    WallSize,
    /// Smallest stone width.
    StoneMinWidth,
    /// Largest stone width.
    StoneMaxWidth,
    /// Stone width range (`min max`, or one value for both).
    StoneWidth,
    /// Smallest course height.
    StoneMinHeight,
    /// Largest course height.
    StoneMaxHeight,
    /// Course height range (`min max`, or one value for both).
    StoneHeight,
    /// Gap between stones in a course.
    JointWidth,
    /// Gap between courses.
    JointHeight,
    /// Both joints (`width height`, or one value for both).
    Joint,
    /// Randomness ratio; values above 1 are read as percentages.
    Randomness,
    /// Coursing pattern (word or numeric code).
    Pattern,
    /// Layout direction (word or numeric code).
    Direction,
}

const SYNONYMS: &[(&str, PresetKey)] = &[
    ("name", PresetKey::Name),
    ("preset", PresetKey::Name),
    ("title", PresetKey::Name),
    ("width", PresetKey::WallWidth),
    ("wall_width", PresetKey::WallWidth),
    ("wallwidth", PresetKey::WallWidth),
    ("height", PresetKey::WallHeight),
    ("wall_height", PresetKey::WallHeight),
    ("wallheight", PresetKey::WallHeight),
    ("wall", PresetKey::WallSize),
    ("wall_size", PresetKey::WallSize),
    ("stone_min_width", PresetKey::StoneMinWidth),
    ("stoneminwidth", PresetKey::StoneMinWidth),
    ("min_width", PresetKey::StoneMinWidth),
    ("min_stone_width", PresetKey::StoneMinWidth),
    ("stone_max_width", PresetKey::StoneMaxWidth),
    ("stonemaxwidth", PresetKey::StoneMaxWidth),
    ("max_width", PresetKey::StoneMaxWidth),
    ("max_stone_width", PresetKey::StoneMaxWidth),
    ("stone_width", PresetKey::StoneWidth),
    ("stone_widths", PresetKey::StoneWidth),
    ("stone_min_height", PresetKey::StoneMinHeight),
    ("stoneminheight", PresetKey::StoneMinHeight),
    ("min_height", PresetKey::StoneMinHeight),
    ("min_stone_height", PresetKey::StoneMinHeight),
    ("stone_max_height", PresetKey::StoneMaxHeight),
    ("stonemaxheight", PresetKey::StoneMaxHeight),
    ("max_height", PresetKey::StoneMaxHeight),
    ("max_stone_height", PresetKey::StoneMaxHeight),
    ("stone_height", PresetKey::StoneHeight),
    ("stone_heights", PresetKey::StoneHeight),
    ("course_height", PresetKey::StoneHeight),
    ("joint_width", PresetKey::JointWidth),
    ("jointwidth", PresetKey::JointWidth),
    ("head_joint", PresetKey::JointWidth),
    ("joint_height", PresetKey::JointHeight),
    ("jointheight", PresetKey::JointHeight),
    ("bed_joint", PresetKey::JointHeight),
    ("joint", PresetKey::Joint),
    ("joints", PresetKey::Joint),
    ("joint_size", PresetKey::Joint),
    ("randomness", PresetKey::Randomness),
    ("random", PresetKey::Randomness),
    ("variation", PresetKey::Randomness),
    ("pattern", PresetKey::Pattern),
    ("pattern_type", PresetKey::Pattern),
    ("patterntype", PresetKey::Pattern),
    ("bond", PresetKey::Pattern),
    ("direction", PresetKey::Direction),
    ("layout_direction", PresetKey::Direction),
    ("layoutdirection", PresetKey::Direction),
    ("orientation", PresetKey::Direction),
];

impl PresetKey {
    /// Resolves a raw key, ignoring case, `-` and spaces versus `_`.
    pub fn lookup(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        SYNONYMS
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, key)| *key)
    }
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_synonyms() {
        assert_eq!(PresetKey::lookup("width"), Some(PresetKey::WallWidth));
        assert_eq!(PresetKey::lookup("WALL_WIDTH"), Some(PresetKey::WallWidth));
        assert_eq!(PresetKey::lookup("wallWidth"), Some(PresetKey::WallWidth));
        assert_eq!(PresetKey::lookup("Stone-Min-Width"), Some(PresetKey::StoneMinWidth));
        assert_eq!(PresetKey::lookup(" joint size "), Some(PresetKey::Joint));
        assert_eq!(PresetKey::lookup("mortar_colour"), None);
    }
}
