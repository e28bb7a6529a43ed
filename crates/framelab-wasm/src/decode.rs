//! Upload decoding WASM bindings.
//!
//! Exposes the framelab-core upload decoder to JavaScript. The upload
//! handler reads the picked file into a `Uint8Array` and hands the bytes
//! here; the format is guessed from the contents.
//!
//! # Example
//!
//! ```typescript
//! import { decode_upload } from '@framelab/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const source = decode_upload(bytes);
//! console.log(`Decoded ${source.width}x${source.height}`);
//! ```

use crate::types::JsRaster;
use framelab_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded image from bytes.
///
/// Accepts anything the bundled decoders handle (JPEG, PNG, GIF, WebP)
/// and applies EXIF orientation correction so the image displays upright.
///
/// # Arguments
///
/// * `bytes` - The raw uploaded file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsRaster` containing the decoded RGBA pixel data, or an error if
/// decoding fails. The hosting UI is expected to swallow the error and
/// keep the prior image visible.
#[wasm_bindgen]
pub fn decode_upload(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    decode::decode_upload(bytes)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
