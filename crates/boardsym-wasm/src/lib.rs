//! Boardsym WASM - WebAssembly bindings for Boardsym
//!
//! This crate exposes the boardsym-core grid symmetry engine to
//! JavaScript/TypeScript board games.
//!
//! # Module Structure
//!
//! - `transform` - In-place transforms on `Int32Array` boards (success flags)
//! - `symmetry` - Symmetry steps, layouts and canonical forms
//! - `types` - `JsGrid` owned board wrapper and shared helpers
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsGrid, symmetric_transformations } from '@boardsym/wasm';
//!
//! await init();
//!
//! const grid = JsGrid.identity(3, 3);
//! for (const kind of symmetric_transformations(3, 3)) {
//!   grid.apply(kind);
//!   console.log(grid.cells());
//! }
//! ```

use wasm_bindgen::prelude::*;

mod symmetry;
mod transform;
mod types;

// Re-export public types
pub use symmetry::{
    canonical_form, describe_symmetries, symmetric_transformation_names,
    symmetric_transformations,
};
pub use transform::{flip_horizontal, flip_vertical, identity, rotate90, transform};
pub use types::JsGrid;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
