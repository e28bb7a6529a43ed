//! Frame overlay renderer WASM bindings.

use crate::types::JsRaster;
use framelab_core::frame::FrameWidth;
use framelab_core::render;
use wasm_bindgen::prelude::*;

/// Render the final composite: avatar clipped under the frame, frame on top.
///
/// The avatar is redrawn inside a circle of radius `230 - frame_width / 2`
/// and the frame art is drawn full-bleed over it. Identical inputs produce
/// pixel-identical output, so the host may call this freely on every
/// slider tick.
///
/// # Arguments
///
/// * `avatar` - the circular avatar raster
/// * `frame` - the selected frame's overlay art
/// * `frame_width` - slider value, clamped to 5-40
///
/// # Example (TypeScript)
///
/// ```typescript
/// const composite = render_composite(avatar, frame_image('frame1'), 20);
/// drawToCanvas(composite);
/// ```
#[wasm_bindgen]
pub fn render_composite(avatar: &JsRaster, frame: &JsRaster, frame_width: u8) -> JsRaster {
    let composite = render::render(
        &avatar.to_raster(),
        &frame.to_raster(),
        FrameWidth::new(frame_width),
    );
    JsRaster::from_raster(composite)
}
