//! WASM-compatible wrapper types for board data.
//!
//! This module provides JavaScript-friendly types that wrap the core boardsym
//! operations, handling the conversion between Rust and JavaScript data
//! representations.

use boardsym_core::{
    symmetric_layouts, transform as core_transform, Shape, TransformError, TransformationKind,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// An owned board for JavaScript.
///
/// Keeps the shape next to the cells so callers cannot pair a buffer with the
/// wrong dimensions after construction.
///
/// # Memory Management
///
/// The cells live in WASM memory. `cells()` copies them out to an
/// `Int32Array`; keep the grid on the WASM side while applying several
/// transforms in a row.
#[wasm_bindgen]
pub struct JsGrid {
    rows: u32,
    columns: u32,
    cells: Vec<i32>,
}

#[wasm_bindgen]
impl JsGrid {
    /// Create a grid from dimensions and row-major cell values.
    ///
    /// # Errors
    ///
    /// Returns an error if `cells.length != rows * columns`.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, columns: u32, cells: Vec<i32>) -> Result<JsGrid, JsValue> {
        Self::try_new(rows, columns, cells).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create a grid holding the identity layout (`cells[i] = i`).
    pub fn identity(rows: u32, columns: u32) -> Result<JsGrid, JsValue> {
        Self::try_identity(rows, columns).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of rows
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Returns the cells as an Int32Array (copy).
    pub fn cells(&self) -> Vec<i32> {
        self.cells.clone()
    }

    /// Apply a transformation by kind code. Returns false and leaves the
    /// cells unchanged if the kind is unknown or invalid for this shape.
    pub fn apply(&mut self, kind: u8) -> bool {
        let kind = TransformationKind::from(kind);
        let result = core_transform(kind, self.rows as usize, self.columns as usize, &mut self.cells);
        report(kind.as_str(), result)
    }

    /// All symmetric layouts of this grid's shape, concatenated.
    ///
    /// The result holds `steps * rows * columns` values; slice it every
    /// `rows * columns` entries to recover each layout.
    pub fn symmetric_layouts(&self) -> Vec<i32> {
        match symmetric_layouts(self.rows as usize, self.columns as usize) {
            Ok(layouts) => layouts.concat(),
            Err(e) => {
                log_rejection("symmetric_layouts", &e);
                Vec::new()
            }
        }
    }
}

impl JsGrid {
    /// Validating constructor used by the JS constructor and by tests.
    pub(crate) fn try_new(rows: u32, columns: u32, cells: Vec<i32>) -> Result<Self, TransformError> {
        Shape::new(rows as usize, columns as usize).validate(cells.len())?;
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    pub(crate) fn try_identity(rows: u32, columns: u32) -> Result<Self, TransformError> {
        let mut cells = Shape::new(rows as usize, columns as usize).alloc_layout()?;
        boardsym_core::identity(rows as usize, columns as usize, &mut cells)?;
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }
}

/// Summary of a shape's symmetry group, serialised to a plain JS object.
#[derive(Debug, Serialize)]
pub(crate) struct SymmetryReport {
    pub shape: Shape,
    pub steps: Vec<TransformationKind>,
    pub layouts: Vec<Vec<i32>>,
}

/// Log a rejected operation to the browser console.
///
/// Only wasm32 has a console to write to; other targets drop the message.
pub(crate) fn log_rejection(operation: &str, error: &TransformError) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&format!(
        "boardsym: {} rejected: {}",
        operation, error
    )));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (operation, error);
}

/// Collapse a core result into the success flag JS callers expect.
pub(crate) fn report(operation: &str, result: Result<(), TransformError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log_rejection(operation, &e);
            false
        }
    }
}
