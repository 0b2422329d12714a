//! Boardsym Core - Grid symmetry engine
//!
//! This crate rotates and mirrors rectangular boards stored as flat, row-major
//! `i32` buffers, and enumerates the symmetry group of a board shape so that
//! equivalent game positions can be recognised.
//!
//! # Module Structure
//!
//! - `transform` - In-place primitives (identity, rotate, flips) and dispatch
//! - `symmetry` - Symmetry steps, layouts and canonical forms per shape

pub mod symmetry;
pub mod transform;

pub use symmetry::{apply_layout, canonical_form, symmetric_layouts, symmetric_transformations};
pub use transform::{
    flip_horizontal, flip_vertical, identity, rotate90, transform, Shape, TransformError,
    TransformationKind, MAX_LAYOUT_CELLS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_square_group_by_steps() {
        // Applying the steps one by one from identity must match the layouts
        let layouts = symmetric_layouts(3, 3).unwrap();
        let mut grid = vec![0; 9];
        for (step, kind) in symmetric_transformations(3, 3).into_iter().enumerate() {
            transform(kind, 3, 3, &mut grid).unwrap();
            assert_eq!(grid, layouts[step]);
        }
    }

    #[test]
    fn test_rectangle_steps_never_rotate() {
        let steps = symmetric_transformations(4, 3);
        assert!(!steps.contains(&TransformationKind::Rotate90));

        let mut grid = vec![0; 12];
        for kind in steps {
            assert!(transform(kind, 4, 3, &mut grid).is_ok());
        }
    }

    #[test]
    fn test_steps_never_contain_unknown() {
        for (rows, columns) in [(3, 3), (4, 3), (1, 5), (0, 0)] {
            assert!(!symmetric_transformations(rows, columns).contains(&TransformationKind::Unknown));
        }
    }
}
