//! Symmetry group WASM bindings.
//!
//! Lets a JavaScript game enumerate the symmetries of its board shape and
//! reduce positions to a canonical form.

use crate::types::{log_rejection, SymmetryReport};
use boardsym_core::{
    canonical_form as core_canonical_form, symmetric_layouts,
    symmetric_transformations as core_symmetric_transformations, Shape,
};
use wasm_bindgen::prelude::*;

/// Kind codes that walk the symmetry group of a `rows x columns` board.
///
/// Square boards get 8 codes, other shapes 4. See `transform` for the codes.
#[wasm_bindgen]
pub fn symmetric_transformations(rows: u32, columns: u32) -> Vec<u8> {
    core_symmetric_transformations(rows as usize, columns as usize)
        .into_iter()
        .map(u8::from)
        .collect()
}

/// Kind names that walk the symmetry group, as a JS array of strings.
///
/// # Example (TypeScript)
///
/// ```typescript
/// symmetric_transformation_names(4, 3);
/// // ["identity", "flip_horizontal", "flip_vertical", "flip_horizontal"]
/// ```
#[wasm_bindgen]
pub fn symmetric_transformation_names(rows: u32, columns: u32) -> Result<JsValue, JsValue> {
    let steps = core_symmetric_transformations(rows as usize, columns as usize);
    serde_wasm_bindgen::to_value(&steps).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Shape, steps and layouts of a board's symmetry group as one plain object.
///
/// ```typescript
/// const { shape, steps, layouts } = describe_symmetries(3, 3);
/// ```
#[wasm_bindgen]
pub fn describe_symmetries(rows: u32, columns: u32) -> Result<JsValue, JsValue> {
    let report = symmetry_report(rows, columns).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Smallest symmetric image of a board.
///
/// # Errors
///
/// Returns an error if `grid.length != rows * columns`. A 0x0 board succeeds
/// with an empty array.
#[wasm_bindgen]
pub fn canonical_form(rows: u32, columns: u32, grid: &[i32]) -> Result<Vec<i32>, JsValue> {
    core_canonical_form(rows as usize, columns as usize, grid).map_err(|e| {
        log_rejection("canonical_form", &e);
        JsValue::from_str(&e.to_string())
    })
}

fn symmetry_report(
    rows: u32,
    columns: u32,
) -> Result<SymmetryReport, boardsym_core::TransformError> {
    let (rows, columns) = (rows as usize, columns as usize);
    Ok(SymmetryReport {
        shape: Shape::new(rows, columns),
        steps: core_symmetric_transformations(rows, columns),
        layouts: symmetric_layouts(rows, columns)?,
    })
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_symmetric_transformation_names() {
        let value = symmetric_transformation_names(4, 3).unwrap();
        let names: Vec<String> = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(
            names,
            vec!["identity", "flip_horizontal", "flip_vertical", "flip_horizontal"]
        );
    }

    #[wasm_bindgen_test]
    fn test_describe_symmetries() {
        let value = describe_symmetries(3, 3).unwrap();
        assert!(value.is_object());
    }

    #[wasm_bindgen_test]
    fn test_canonical_form_rejects_mismatch() {
        assert!(canonical_form(3, 3, &[0; 4]).is_err());
        assert!(canonical_form(0, 0, &[]).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_describe_symmetries_rejects_oversized_shape() {
        assert!(describe_symmetries(1 << 15, 1 << 15).is_err());
    }

    #[wasm_bindgen_test]
    fn test_js_grid_identity_rejects_oversized_shape() {
        assert!(crate::types::JsGrid::identity(1 << 15, 1 << 15).is_err());
    }

    #[wasm_bindgen_test]
    fn test_js_grid_constructor_rejects_mismatch() {
        let result = crate::types::JsGrid::new(3, 3, vec![0; 8]);
        assert!(result.is_err());
    }
}
