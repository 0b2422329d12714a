//! In-place symmetry transforms on flat row-major grids.
//!
//! Every operation takes the grid shape and a caller-owned `&mut [i32]` buffer
//! and either transforms the whole buffer or returns an error without touching
//! it. Shape validation always happens before the first write.
//!
//! # Coordinate System
//!
//! - Cell (`row`, `column`) lives at index `row * columns + column`
//! - Row 0 is the top of the board, column 0 the left edge
//! - Rotation is clockwise

mod flip;
mod rotation;
mod types;

pub use flip::{flip_horizontal, flip_vertical};
pub use rotation::rotate90;
pub use types::{Shape, TransformError, TransformationKind, MAX_LAYOUT_CELLS};

/// Reset a grid to its identity layout, `grid[i] = i`.
///
/// The current contents are ignored. The identity layout is the starting point
/// for enumerating symmetries: after a sequence of transforms each cell holds
/// the index it originally came from.
///
/// # Errors
///
/// Returns `TransformError::ShapeMismatch` if `grid.len() != rows * columns`,
/// or if the board has more than [`MAX_LAYOUT_CELLS`] cells and its indices
/// would not fit in an `i32`.
pub fn identity(
    rows: usize,
    columns: usize,
    grid: &mut [i32],
) -> Result<(), TransformError> {
    let shape = Shape::new(rows, columns);
    shape.validate(grid.len())?;
    shape.layout_cell_count()?;

    for (i, cell) in grid.iter_mut().enumerate() {
        *cell = i as i32;
    }

    Ok(())
}

/// Apply one transformation to a grid in place.
///
/// # Errors
///
/// - `TransformError::UnknownKind` for `TransformationKind::Unknown`
/// - whatever the dispatched primitive reports for the shape
pub fn transform(
    kind: TransformationKind,
    rows: usize,
    columns: usize,
    grid: &mut [i32],
) -> Result<(), TransformError> {
    match kind {
        TransformationKind::Identity => identity(rows, columns, grid),
        TransformationKind::Rotate90 => rotate90(rows, columns, grid),
        TransformationKind::FlipVertical => flip_vertical(rows, columns, grid),
        TransformationKind::FlipHorizontal => flip_horizontal(rows, columns, grid),
        TransformationKind::Unknown => Err(TransformError::UnknownKind),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
