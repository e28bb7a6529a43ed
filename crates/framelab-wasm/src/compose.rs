//! Circular compositor WASM bindings.

use crate::types::JsRaster;
use framelab_core::compose::{self, Viewport};
use framelab_core::crop::CropRegion;
use wasm_bindgen::prelude::*;

/// Render a crop region of the source into the circular 460x460 avatar.
///
/// # Arguments
///
/// * `source` - decoded source image
/// * `region` - committed `{x, y, width, height}` crop in displayed pixels
/// * `viewport_width` / `viewport_height` - displayed size of the source,
///   used to map the region back to native pixels
///
/// # Returns
///
/// The circularly masked avatar, or `undefined` when the region has zero
/// size or the source is empty - the commit is silently ignored, matching
/// the crop-apply button's guard.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const avatar = compose_avatar(source, crop, img.width, img.height);
/// if (avatar) {
///   drawToCanvas(avatar);
/// }
/// ```
#[wasm_bindgen]
pub fn compose_avatar(
    source: &JsRaster,
    region: JsValue,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<Option<JsRaster>, JsValue> {
    let region: CropRegion =
        serde_wasm_bindgen::from_value(region).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let viewport = Viewport {
        width: viewport_width,
        height: viewport_height,
    };

    let avatar = compose::compose(&source.to_raster(), &region, &viewport);
    Ok(avatar.map(JsRaster::from_raster))
}
