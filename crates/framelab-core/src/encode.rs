//! PNG encoding for export.
//!
//! The export path serializes the visible composite to PNG bytes with the
//! `image` crate's encoder. PNG keeps the transparency outside the circle
//! intact in the downloaded avatar.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::raster::{Raster, BYTES_PER_PIXEL};

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a [`Raster`] to PNG bytes.
pub fn encode_png_raster(raster: &Raster) -> Result<Vec<u8>, EncodeError> {
    encode_png(&raster.pixels, raster.width, raster.height)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=50, 1u32..=50)
    }

    proptest! {
        /// Property: valid input always produces a parseable PNG.
        #[test]
        fn prop_valid_input_produces_valid_png(
            (width, height) in dimensions_strategy(),
        ) {
            let pixels = vec![128u8; (width as usize) * (height as usize) * 4];
            let result = encode_png(&pixels, width, height);
            prop_assert!(result.is_ok());

            let png = result.unwrap();
            prop_assert_eq!(&png[..4], &[0x89, 0x50, 0x4E, 0x47]);

            let decoded = image::load_from_memory(&png);
            prop_assert!(decoded.is_ok(), "Output should decode back");
            let decoded = decoded.unwrap();
            prop_assert_eq!(decoded.width(), width);
            prop_assert_eq!(decoded.height(), height);
        }

        /// Property: mismatched buffer lengths always return an error.
        #[test]
        fn prop_invalid_pixel_length_returns_error(
            (width, height) in dimensions_strategy(),
            extra_or_missing in -10i32..=10,
        ) {
            prop_assume!(extra_or_missing != 0);

            let expected = (width as usize) * (height as usize) * 4;
            let actual = if extra_or_missing > 0 {
                expected + extra_or_missing as usize
            } else {
                expected.saturating_sub((-extra_or_missing) as usize)
            };
            prop_assume!(actual != expected);

            let pixels = vec![128u8; actual];
            let result = encode_png(&pixels, width, height);
            prop_assert!(
                matches!(result, Err(EncodeError::InvalidPixelData { .. })),
                "expected InvalidPixelData error, got {:?}",
                result
            );
        }

        /// Property: zero dimensions always return an error.
        #[test]
        fn prop_zero_dimensions_return_error(
            width in 0u32..=1,
            height in 0u32..=1,
        ) {
            prop_assume!(width == 0 || height == 0);

            let result = encode_png(&[], width, height);
            prop_assert!(
                matches!(result, Err(EncodeError::InvalidDimensions { .. })),
                "expected InvalidDimensions error, got {:?}",
                result
            );
        }
    }
}
