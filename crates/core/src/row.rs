//! Row packer: lays out one course of stones.

use crate::params::Parameters;
use crate::sequence::{SeededSequence, MIN_STONE_SIZE};
use crate::stone::Stone;

/// One packed course.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Stones in left-to-right order.
    pub stones: Vec<Stone>,
    /// Course height shared by every stone in it.
    pub height: f64,
    /// Horizontal start of the course (zero or negative).
    pub offset: f64,
    /// Bottom of the next course.
    pub next_y: f64,
    /// Id counter for the next stone.
    pub next_id: usize,
    /// Candidate slots walked, including discarded ones.
    pub candidates: usize,
}

/// Packs one course starting at `start_y`.
///
/// Draw order is fixed: base height, height jitter, the pattern's offset
/// (if any), then base width and width jitter for each candidate stone.
///
/// A candidate that would cross the right wall edge is shrunk to end
/// exactly on it. Candidates whose width ends up at or below
/// [`MIN_STONE_SIZE`] are not placed, but their slot still advances the
/// cursor.
pub fn pack_row(
    params: &Parameters,
    seq: &mut SeededSequence,
    start_y: f64,
    start_id: usize,
    is_first_row: bool,
    depth: f64,
) -> Row {
    let base_height = seq.lerp_draw(params.stone_min_height, params.stone_max_height);
    let height = seq.jitter(base_height, params.randomness);

    let offset = params.pattern.row_offset(seq, is_first_row);

    let mut stones = Vec::new();
    let mut next_id = start_id;
    let mut candidates = 0;
    let mut cursor = offset;

    while cursor < params.wall_width {
        let base_width = seq.lerp_draw(params.stone_min_width, params.stone_max_width);
        let mut width = seq.jitter(base_width, params.randomness);

        if cursor + width > params.wall_width {
            width = params.wall_width - cursor;
        }

        if width > MIN_STONE_SIZE {
            stones.push(Stone::new(next_id, cursor, start_y, width, height, depth));
            next_id += 1;
        }

        candidates += 1;
        cursor += width + params.joint_width;
    }

    Row {
        stones,
        height,
        offset,
        next_y: start_y + height + params.joint_height,
        next_id,
        candidates,
    }
}
