//! Symmetry groups of rectangular boards.
//!
//! A square board has the eight symmetries of the dihedral group D4 (four
//! rotations, each optionally mirrored). A non-square board only has the four
//! of the Klein four-group: rotation would swap rows and columns, so it is not
//! a symmetry of the shape.
//!
//! [`symmetric_transformations`] lists the transforms that, applied one after
//! another to an identity layout, visit every element of the group exactly
//! once. [`symmetric_layouts`] performs that walk and records each layout.

use crate::transform::{identity, transform, Shape, TransformError, TransformationKind};

/// Steps that walk the eight symmetries of a square board.
const SQUARE_STEPS: [TransformationKind; 8] = [
    TransformationKind::Identity,
    TransformationKind::Rotate90,
    TransformationKind::Rotate90,
    TransformationKind::Rotate90,
    TransformationKind::FlipHorizontal,
    TransformationKind::Rotate90,
    TransformationKind::Rotate90,
    TransformationKind::Rotate90,
];

/// Steps that walk the four symmetries of a non-square board.
const RECTANGLE_STEPS: [TransformationKind; 4] = [
    TransformationKind::Identity,
    TransformationKind::FlipHorizontal,
    TransformationKind::FlipVertical,
    TransformationKind::FlipHorizontal,
];

/// Ordered transformation steps that enumerate the symmetry group of a
/// `rows x columns` board.
///
/// Applying the steps in order to an identity layout visits every symmetric
/// arrangement. Square boards get 8 steps, everything else gets 4.
pub fn symmetric_transformations(rows: usize, columns: usize) -> Vec<TransformationKind> {
    if rows == columns {
        SQUARE_STEPS.to_vec()
    } else {
        RECTANGLE_STEPS.to_vec()
    }
}

/// Walk the symmetry group of a shape and collect every layout visited.
///
/// Each returned layout is a permutation of `0..rows * columns`: entry `i`
/// holds the original index of the cell that ends up at position `i`. The
/// first layout is always the identity.
///
/// # Errors
///
/// Returns `TransformError::ShapeMismatch` if `rows * columns` overflows,
/// exceeds [`MAX_LAYOUT_CELLS`](crate::transform::MAX_LAYOUT_CELLS), or cannot be allocated.
pub fn symmetric_layouts(rows: usize, columns: usize) -> Result<Vec<Vec<i32>>, TransformError> {
    let shape = Shape::new(rows, columns);
    let steps = symmetric_transformations(rows, columns);
    let mut grid = shape.alloc_layout()?;
    identity(rows, columns, &mut grid)?;

    let mut layouts = Vec::with_capacity(steps.len());
    for kind in steps {
        transform(kind, rows, columns, &mut grid)?;
        let mut snapshot = shape.alloc_layout()?;
        snapshot.copy_from_slice(&grid);
        layouts.push(snapshot);
    }

    Ok(layouts)
}

/// Gather a board through a layout: `out[i] = grid[layout[i]]`.
///
/// With a layout from [`symmetric_layouts`] this yields the board as seen
/// under that symmetry, without disturbing the caller's board.
///
/// # Errors
///
/// Returns `TransformError::ShapeMismatch` if either buffer does not hold
/// `rows * columns` cells or a layout entry points outside the board.
pub fn apply_layout(
    rows: usize,
    columns: usize,
    layout: &[i32],
    grid: &[i32],
) -> Result<Vec<i32>, TransformError> {
    let shape = Shape::new(rows, columns);
    shape.validate(layout.len())?;
    let count = shape.validate(grid.len())?;

    let mismatch = TransformError::ShapeMismatch {
        rows,
        columns,
        len: count,
    };
    layout
        .iter()
        .map(|&source| {
            usize::try_from(source)
                .ok()
                .and_then(|index| grid.get(index).copied())
                .ok_or(mismatch)
        })
        .collect()
}

/// Smallest (lexicographic) image of a board over its symmetry group.
///
/// Two boards that are rotations or mirrors of each other share a canonical
/// form, so it can key a transposition table or deduplicate game states.
///
/// # Errors
///
/// Returns `TransformError::ShapeMismatch` if `grid.len() != rows * columns`.
pub fn canonical_form(
    rows: usize,
    columns: usize,
    grid: &[i32],
) -> Result<Vec<i32>, TransformError> {
    Shape::new(rows, columns).validate(grid.len())?;

    let mut best: Option<Vec<i32>> = None;
    for layout in symmetric_layouts(rows, columns)? {
        let image = apply_layout(rows, columns, &layout, grid)?;
        if best.as_ref().map_or(true, |current| image < *current) {
            best = Some(image);
        }
    }

    Ok(best.unwrap_or_default())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
