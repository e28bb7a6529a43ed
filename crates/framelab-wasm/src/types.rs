//! WASM-compatible wrapper types for raster data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Framelab types, handling the conversion between Rust and JavaScript
//! data representations.

use framelab_core::raster::Raster;
use wasm_bindgen::prelude::*;

/// An RGBA raster wrapper for JavaScript.
///
/// Wraps the core `Raster` type and provides a JavaScript-friendly
/// interface for accessing dimensions and pixel data, e.g. to feed an
/// `ImageData` for canvas display.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a
/// copy is made to JavaScript memory as a `Uint8Array`. The `free()`
/// method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a new JsRaster from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Surface width in pixels
    /// * `height` - Surface height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRaster {
        JsRaster {
            width,
            height,
            pixels,
        }
    }

    /// Get the surface width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the surface height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4 for RGBA)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as a Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data, as required for safe
    /// memory management across the WASM boundary.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this to immediately release a large surface.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRaster {
    /// Create a JsRaster from a core Raster.
    pub(crate) fn from_raster(raster: Raster) -> Self {
        Self {
            width: raster.width,
            height: raster.height,
            pixels: raster.pixels,
        }
    }

    /// Convert back to a core Raster.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_raster(&self) -> Raster {
        Raster {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_raster_creation() {
        let r = JsRaster {
            width: 100,
            height: 50,
            pixels: vec![0u8; 100 * 50 * 4],
        };
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 50);
        assert_eq!(r.byte_length(), 20000);
    }

    #[test]
    fn test_js_raster_pixels() {
        let pixels = vec![255u8, 128, 64, 255, 32, 16, 8, 255]; // 2 RGBA pixels
        let r = JsRaster {
            width: 2,
            height: 1,
            pixels: pixels.clone(),
        };
        assert_eq!(r.pixels(), pixels);
    }

    #[test]
    fn test_from_raster() {
        let raster = Raster::blank(200, 100);
        let js = JsRaster::from_raster(raster);
        assert_eq!(js.width(), 200);
        assert_eq!(js.height(), 100);
        assert_eq!(js.byte_length(), 80000);
    }

    #[test]
    fn test_to_raster() {
        let js = JsRaster {
            width: 50,
            height: 25,
            pixels: vec![128u8; 50 * 25 * 4],
        };
        let raster = js.to_raster();
        assert_eq!(raster.width, 50);
        assert_eq!(raster.height, 25);
        assert_eq!(raster.pixels.len(), 5000);
    }
}
