//! Core types for grid transformations.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for grid transformation operations.
///
/// Every variant is reported before the buffer is touched, so a failed call
/// never leaves a grid half-transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The buffer length does not equal `rows * columns`.
    #[error("Grid of {len} cells does not match a {rows}x{columns} shape")]
    ShapeMismatch {
        rows: usize,
        columns: usize,
        len: usize,
    },

    /// The transformation is undefined for this shape (rotation of a non-square grid).
    #[error("Cannot rotate a non-square {rows}x{columns} grid")]
    UnsupportedShape { rows: usize, columns: usize },

    /// The transformation kind is `Unknown` and cannot be dispatched.
    #[error("Unknown transformation kind")]
    UnknownKind,
}

/// The closed set of transformations the engine can apply.
///
/// Codes are stable so the kind can cross a JS or storage boundary as a `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TransformationKind {
    /// Unset or invalid. Never dispatched.
    #[default]
    Unknown = 0,
    /// Reset the grid to `grid[i] = i`.
    Identity = 1,
    /// Rotate 90 degrees clockwise (square grids only).
    Rotate90 = 2,
    /// Mirror left-right: reverse the column order of every row.
    FlipVertical = 3,
    /// Mirror top-bottom: reverse the row order.
    FlipHorizontal = 4,
}

impl TransformationKind {
    /// Returns true if applying this transformation twice restores the grid.
    #[inline]
    pub fn is_involution(self) -> bool {
        matches!(
            self,
            TransformationKind::FlipVertical | TransformationKind::FlipHorizontal
        )
    }

    /// Stable name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TransformationKind::Unknown => "unknown",
            TransformationKind::Identity => "identity",
            TransformationKind::Rotate90 => "rotate90",
            TransformationKind::FlipVertical => "flip_vertical",
            TransformationKind::FlipHorizontal => "flip_horizontal",
        }
    }
}

impl From<u8> for TransformationKind {
    fn from(value: u8) -> Self {
        match value {
            1 => TransformationKind::Identity,
            2 => TransformationKind::Rotate90,
            3 => TransformationKind::FlipVertical,
            4 => TransformationKind::FlipHorizontal,
            _ => TransformationKind::Unknown,
        }
    }
}

impl From<TransformationKind> for u8 {
    fn from(kind: TransformationKind) -> Self {
        kind as u8
    }
}

impl fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Largest board whose cell indices still fit in an `i32` cell value.
///
/// Identity and symmetry layouts store cell indices in the grid itself, so
/// they are limited to this many cells.
pub const MAX_LAYOUT_CELLS: usize = i32::MAX as usize;

/// Row and column counts of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Shape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
}

impl Shape {
    /// Create a new shape.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of cells, or `None` if `rows * columns` overflows.
    #[inline]
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Returns true if rows and columns are equal.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Row-major index of the cell at (`row`, `column`).
    #[inline]
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Check that a buffer of `len` cells fits this shape.
    ///
    /// Returns the cell count on success.
    pub fn validate(&self, len: usize) -> Result<usize, TransformError> {
        match self.cell_count() {
            Some(count) if count == len => Ok(count),
            _ => Err(TransformError::ShapeMismatch {
                rows: self.rows,
                columns: self.columns,
                len,
            }),
        }
    }
}

impl Shape {
    /// Cell count of a board that can hold an index layout.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::ShapeMismatch` if `rows * columns` overflows
    /// or exceeds [`MAX_LAYOUT_CELLS`].
    pub fn layout_cell_count(&self) -> Result<usize, TransformError> {
        match self.cell_count() {
            Some(count) if count <= MAX_LAYOUT_CELLS => Ok(count),
            _ => Err(self.unrepresentable()),
        }
    }

    /// Allocate a zeroed buffer sized for an index layout of this shape.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::ShapeMismatch` if the shape is too large for an
    /// index layout or the allocation cannot be satisfied.
    pub fn alloc_layout(&self) -> Result<Vec<i32>, TransformError> {
        let count = self.layout_cell_count()?;
        let mut grid = Vec::new();
        grid.try_reserve_exact(count).map_err(|_| self.unrepresentable())?;
        grid.resize(count, 0);
        Ok(grid)
    }

    fn unrepresentable(&self) -> TransformError {
        TransformError::ShapeMismatch {
            rows: self.rows,
            columns: self.columns,
            len: 0,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}
