//! Quarter-turn rotation of square grids.
//!
//! # Algorithm
//!
//! Source and destination index sets overlap completely, so the grid is first
//! copied to a scratch buffer and every destination cell is then written from
//! that snapshot. For a clockwise quarter turn of an `n x n` grid:
//!
//! ```text
//! (r, c) -> (c, n - 1 - r)
//!
//! 1 | 2 | 3        7 | 4 | 1
//! 4 | 5 | 6   ->   8 | 5 | 2
//! 7 | 8 | 9        9 | 6 | 3
//! ```

use super::types::{Shape, TransformError};

/// Rotate a square grid 90 degrees clockwise in place.
///
/// # Errors
///
/// - `TransformError::ShapeMismatch` if `grid.len() != rows * columns`
/// - `TransformError::UnsupportedShape` if `rows != columns`
///
/// Length is checked first. The grid is not modified on error.
pub fn rotate90(rows: usize, columns: usize, grid: &mut [i32]) -> Result<(), TransformError> {
    let shape = Shape::new(rows, columns);
    shape.validate(grid.len())?;
    if !shape.is_square() {
        return Err(TransformError::UnsupportedShape { rows, columns });
    }

    let scratch = grid.to_vec();
    for (i, &value) in scratch.iter().enumerate() {
        let (row, column) = (i / columns, i % columns);
        grid[rotated_index(shape, row, column)] = value;
    }

    Ok(())
}

/// Destination index of cell (`row`, `column`) after a clockwise quarter turn.
#[inline]
fn rotated_index(shape: Shape, row: usize, column: usize) -> usize {
    shape.index(column, shape.rows - 1 - row)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
