//! PNG export WASM bindings.
//!
//! The download button serializes the visible composite to PNG bytes and
//! hands them to a client-side save with the fixed filename.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png_from_image, export_filename } from '@framelab/wasm';
//!
//! const png = encode_png_from_image(composite);
//! saveBlob(new Blob([png], { type: 'image/png' }), export_filename());
//! ```

use crate::types::JsRaster;
use framelab_core::encode;
use framelab_core::session::EXPORT_FILENAME;
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data as a `Uint8Array` (4 bytes per pixel)
/// * `width` - Surface width in pixels
/// * `height` - Surface height in pixels
///
/// # Errors
///
/// Returns an error if the pixel data length doesn't match
/// width * height * 4, either dimension is zero, or encoding fails.
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a `JsRaster` to PNG bytes.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsRaster) -> Result<Vec<u8>, JsValue> {
    encode::encode_png_raster(&image.to_raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The fixed download filename for exported avatars.
#[wasm_bindgen]
pub fn export_filename() -> String {
    EXPORT_FILENAME.to_string()
}


/// WASM-specific tests that require JsValue.
///
/// These use functions that return `Result<T, JsValue>` and can only run
/// on wasm32 targets. Use `wasm-pack test` to run these; see
/// `framelab_core::encode` for the underlying coverage.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_png_basic() {
        let pixels = vec![128u8; 100 * 100 * 4];
        let result = encode_png(&pixels, 100, 100);
        assert!(result.is_ok());
        assert_eq!(&result.unwrap()[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[wasm_bindgen_test]
    fn test_encode_png_invalid_dimensions() {
        let result = encode_png(&[], 0, 100);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_png_invalid_pixel_data() {
        let pixels = vec![128u8; 50 * 50 * 4]; // Wrong size for 100x100
        let result = encode_png(&pixels, 100, 100);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_png_from_image() {
        let image = JsRaster::new(50, 50, vec![128u8; 50 * 50 * 4]);
        let result = encode_png_from_image(&image);
        assert!(result.is_ok());
    }
}
