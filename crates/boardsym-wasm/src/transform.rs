//! WASM bindings for in-place grid transforms.
//!
//! Each binding takes the board as an `Int32Array`, transforms it in place and
//! returns `true` on success. On failure the array is left as it was, `false`
//! is returned and the reason is logged to the console.

use crate::types::report;
use boardsym_core::transform::{self as engine, TransformationKind};
use wasm_bindgen::prelude::*;

/// Apply a transformation, selected by kind code, to a board in place.
///
/// # Arguments
///
/// * `kind` - 1 = identity, 2 = rotate 90, 3 = vertical flip, 4 = horizontal flip
/// * `rows` - Number of board rows
/// * `columns` - Number of board columns
/// * `grid` - Row-major board cells (`rows * columns` entries)
///
/// # Example (TypeScript)
///
/// ```typescript
/// const board = new Int32Array([1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// if (transform(2, 3, 3, board)) {
///   // board is now [7, 4, 1, 8, 5, 2, 9, 6, 3]
/// }
/// ```
#[wasm_bindgen]
pub fn transform(kind: u8, rows: u32, columns: u32, grid: &mut [i32]) -> bool {
    let kind = TransformationKind::from(kind);
    report(
        kind.as_str(),
        engine::transform(kind, rows as usize, columns as usize, grid),
    )
}

/// Reset a board to its identity layout (`grid[i] = i`).
#[wasm_bindgen]
pub fn identity(rows: u32, columns: u32, grid: &mut [i32]) -> bool {
    report("identity", engine::identity(rows as usize, columns as usize, grid))
}

/// Rotate a square board 90 degrees clockwise.
#[wasm_bindgen]
pub fn rotate90(rows: u32, columns: u32, grid: &mut [i32]) -> bool {
    report("rotate90", engine::rotate90(rows as usize, columns as usize, grid))
}

/// Reverse the row order of a board.
#[wasm_bindgen]
pub fn flip_horizontal(rows: u32, columns: u32, grid: &mut [i32]) -> bool {
    report(
        "flip_horizontal",
        engine::flip_horizontal(rows as usize, columns as usize, grid),
    )
}

/// Reverse the column order of every row of a board.
#[wasm_bindgen]
pub fn flip_vertical(rows: u32, columns: u32, grid: &mut [i32]) -> bool {
    report(
        "flip_vertical",
        engine::flip_vertical(rows as usize, columns as usize, grid),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x3() -> Vec<i32> {
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
    }

    #[test]
    fn test_transform_by_code() {
        let mut grid = board_3x3();
        assert!(transform(4, 3, 3, &mut grid));
        assert_eq!(grid, vec![7, 8, 9, 4, 5, 6, 1, 2, 3]);

        let mut grid = board_3x3();
        assert!(transform(3, 3, 3, &mut grid));
        assert_eq!(grid, vec![3, 2, 1, 6, 5, 4, 9, 8, 7]);
    }

    #[test]
    fn test_transform_unknown_code() {
        let mut grid = board_3x3();
        assert!(!transform(0, 3, 3, &mut grid));
        assert!(!transform(42, 3, 3, &mut grid));
        assert_eq!(grid, board_3x3());
    }

    #[test]
    fn test_primitives() {
        let mut grid = board_3x3();
        assert!(rotate90(3, 3, &mut grid));
        assert_eq!(grid, vec![7, 4, 1, 8, 5, 2, 9, 6, 3]);

        assert!(identity(3, 3, &mut grid));
        assert_eq!(grid, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);

        assert!(flip_vertical(3, 3, &mut grid));
        assert!(flip_vertical(3, 3, &mut grid));
        assert!(flip_horizontal(3, 3, &mut grid));
        assert_eq!(grid, vec![6, 7, 8, 3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn test_rotate_non_square_returns_false() {
        let mut grid: Vec<i32> = (0..12).collect();
        assert!(!rotate90(4, 3, &mut grid));
        assert_eq!(grid, (0..12).collect::<Vec<i32>>());
    }

    #[test]
    fn test_length_mismatch_returns_false() {
        let mut grid = vec![1, 2, 3];
        assert!(!identity(2, 2, &mut grid));
        assert!(!flip_horizontal(2, 2, &mut grid));
        assert!(!flip_vertical(2, 2, &mut grid));
        assert!(!rotate90(2, 2, &mut grid));
        assert_eq!(grid, vec![1, 2, 3]);
    }
}
