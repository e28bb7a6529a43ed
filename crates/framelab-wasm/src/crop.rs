//! Crop selector WASM bindings.
//!
//! The crop UI keeps the region as a plain JavaScript object
//! `{x, y, width, height}` in displayed-pixel space; these bindings
//! compute the initial centered region and apply drag/resize deltas with
//! the square and minimum-size constraints enforced in core.

use framelab_core::crop::{self, CropDelta, CropRegion};
use wasm_bindgen::prelude::*;

/// Compute the initial centered crop for a newly loaded source.
///
/// # Arguments
///
/// * `source_width` / `source_height` - displayed size of the source
///
/// # Returns
///
/// A `{x, y, width, height}` object: a centered square at 80% of the
/// shorter side.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const crop = initial_crop(img.width, img.height);
/// ```
#[wasm_bindgen]
pub fn initial_crop(source_width: f32, source_height: f32) -> Result<JsValue, JsValue> {
    let region = crop::initialize_crop(source_width, source_height);
    serde_wasm_bindgen::to_value(&region).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply a user drag/resize to a crop region.
///
/// # Arguments
///
/// * `region` - current `{x, y, width, height}` object
/// * `delta` - `{dx, dy, dsize}` adjustment in displayed pixels
/// * `source_width` / `source_height` - displayed size of the source
///
/// # Returns
///
/// The adjusted region, clamped to bounds, kept square, and held to the
/// minimum side length. Invalid deltas are clamped, never rejected.
#[wasm_bindgen]
pub fn update_crop(
    region: JsValue,
    delta: JsValue,
    source_width: f32,
    source_height: f32,
) -> Result<JsValue, JsValue> {
    let region: CropRegion =
        serde_wasm_bindgen::from_value(region).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let delta: CropDelta =
        serde_wasm_bindgen::from_value(delta).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let updated = crop::update_crop(region, delta, source_width, source_height);
    serde_wasm_bindgen::to_value(&updated).map_err(|e| JsValue::from_str(&e.to_string()))
}
