//! Mirror operations on row-major grids.
//!
//! Both flips are in-place pairwise swaps and are their own inverse.
//!
//! # Naming
//!
//! The names follow the axis the board is mirrored *across* when laid out on
//! screen:
//! - **Horizontal flip**: top and bottom rows trade places (row order reversed)
//! - **Vertical flip**: left and right columns trade places (column order reversed)
//!
//! ```text
//! 1 | 2 | 3        7 | 8 | 9        3 | 2 | 1
//! 4 | 5 | 6   HF   4 | 5 | 6   VF   6 | 5 | 4
//! 7 | 8 | 9        1 | 2 | 3        9 | 8 | 7
//! ```

use super::types::{Shape, TransformError};

/// Reverse the row order of a grid in place.
///
/// Row `i` is swapped with row `rows - 1 - i` for every `i < rows / 2`; a
/// middle row of an odd-height grid stays put.
///
/// # Errors
///
/// Returns `TransformError::ShapeMismatch` if `grid.len() != rows * columns`.
/// The grid is not modified on error.
pub fn flip_horizontal(
    rows: usize,
    columns: usize,
    grid: &mut [i32],
) -> Result<(), TransformError> {
    Shape::new(rows, columns).validate(grid.len())?;

    if columns == 0 {
        return Ok(());
    }

    // Split so the top and bottom halves can be borrowed at once
    let (top, bottom) = grid.split_at_mut((rows / 2) * columns);
    let bottom_len = bottom.len();
    for (i, top_row) in top.chunks_exact_mut(columns).enumerate() {
        let start = bottom_len - (i + 1) * columns;
        top_row.swap_with_slice(&mut bottom[start..start + columns]);
    }

    Ok(())
}

/// Reverse the column order of every row in place.
///
/// # Errors
///
/// Returns `TransformError::ShapeMismatch` if `grid.len() != rows * columns`.
/// The grid is not modified on error.
pub fn flip_vertical(
    rows: usize,
    columns: usize,
    grid: &mut [i32],
) -> Result<(), TransformError> {
    Shape::new(rows, columns).validate(grid.len())?;

    if columns == 0 {
        return Ok(());
    }

    for row in grid.chunks_exact_mut(columns) {
        row.reverse();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x3() -> Vec<i32> {
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
    }

    #[test]
    fn test_flip_horizontal_3x3() {
        let mut grid = board_3x3();
        flip_horizontal(3, 3, &mut grid).unwrap();
        assert_eq!(grid, vec![7, 8, 9, 4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_flip_vertical_3x3() {
        let mut grid = board_3x3();
        flip_vertical(3, 3, &mut grid).unwrap();
        assert_eq!(grid, vec![3, 2, 1, 6, 5, 4, 9, 8, 7]);
    }

    #[test]
    fn test_flip_horizontal_even_rows() {
        // 4 rows x 3 columns, every row swaps
        let mut grid: Vec<i32> = (0..12).collect();
        flip_horizontal(4, 3, &mut grid).unwrap();
        assert_eq!(grid, vec![9, 10, 11, 6, 7, 8, 3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn test_flip_vertical_rectangular() {
        // 2 rows x 4 columns
        let mut grid: Vec<i32> = (0..8).collect();
        flip_vertical(2, 4, &mut grid).unwrap();
        assert_eq!(grid, vec![3, 2, 1, 0, 7, 6, 5, 4]);
    }

    #[test]
    fn test_flip_horizontal_single_row_is_noop() {
        let mut grid = vec![1, 2, 3];
        flip_horizontal(1, 3, &mut grid).unwrap();
        assert_eq!(grid, vec![1, 2, 3]);
    }

    #[test]
    fn test_flip_vertical_single_column_is_noop() {
        let mut grid = vec![1, 2, 3];
        flip_vertical(3, 1, &mut grid).unwrap();
        assert_eq!(grid, vec![1, 2, 3]);
    }

    #[test]
    fn test_flip_empty_grid() {
        let mut grid: Vec<i32> = Vec::new();
        assert!(flip_horizontal(0, 0, &mut grid).is_ok());
        assert!(flip_vertical(0, 0, &mut grid).is_ok());
        assert!(flip_horizontal(3, 0, &mut grid).is_ok());
        assert!(flip_vertical(0, 3, &mut grid).is_ok());
    }

    #[test]
    fn test_flip_horizontal_rejects_wrong_length() {
        let mut grid = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let result = flip_horizontal(3, 3, &mut grid);
        assert_eq!(
            result,
            Err(TransformError::ShapeMismatch {
                rows: 3,
                columns: 3,
                len: 8
            })
        );
        assert_eq!(grid, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_flip_vertical_rejects_wrong_length() {
        let mut grid = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        assert!(flip_vertical(3, 3, &mut grid).is_err());
        assert_eq!(grid, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
