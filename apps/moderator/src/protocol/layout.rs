//! Two-column layout for target and pairing lists.
//!
//! The engine always hands out positions in canonical ascending order; this
//! module only decides how a chat keyboard arranges them.

use crate::domain::state::Position;

/// Reorder so that chunking by two reads down the left column, then the right.
///
/// `[1, 2, 3, 4, 5]` becomes `[1, 4, 2, 5, 3]`, i.e. rows `(1 4) (2 5) (3)`.
pub fn interleave_columns(positions: &[Position]) -> Vec<Position> {
    let split = positions.len().div_ceil(2);
    let (left, right) = positions.split_at(split);
    let mut out = Vec::with_capacity(positions.len());
    for (idx, &pos) in left.iter().enumerate() {
        out.push(pos);
        if let Some(&other) = right.get(idx) {
            out.push(other);
        }
    }
    out
}

/// Keyboard rows: pairs from [`interleave_columns`], or one per row.
pub fn target_rows(positions: &[Position], double_column: bool) -> Vec<Vec<Position>> {
    if double_column {
        interleave_columns(positions)
            .chunks(2)
            .map(<[Position]>::to_vec)
            .collect()
    } else {
        positions.iter().map(|&p| vec![p]).collect()
    }
}
