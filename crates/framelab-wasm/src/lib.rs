//! Framelab WASM - WebAssembly bindings for Framelab
//!
//! This crate exposes the framelab-core avatar pipeline to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for raster data
//! - `decode` - Upload decoding bindings
//! - `crop` - Crop selector bindings
//! - `compose` - Circular compositor bindings
//! - `frames` - Frame catalog bindings
//! - `render` - Frame overlay renderer bindings
//! - `encode` - PNG export bindings
//! - `studio` - The stateful session object driving the interactive flow
//!
//! # Usage
//!
//! ```typescript
//! import init, { Studio } from '@framelab/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const studio = new Studio();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! if (studio.load_source(bytes)) {
//!   studio.apply_crop();
//!   const png = studio.export_png();
//! }
//! ```

use wasm_bindgen::prelude::*;

mod compose;
mod crop;
mod decode;
mod encode;
mod frames;
mod render;
mod studio;
mod types;

// Re-export public types
pub use compose::compose_avatar;
pub use crop::{initial_crop, update_crop};
pub use decode::decode_upload;
pub use encode::{encode_png, encode_png_from_image, export_filename};
pub use frames::{frame_catalog, frame_image};
pub use render::render_composite;
pub use studio::Studio;
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
