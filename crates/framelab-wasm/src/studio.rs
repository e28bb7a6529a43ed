//! Stateful session binding for the interactive flow.
//!
//! Hosts that don't want to wire the free functions together can hold one
//! `Studio` and drive it with UI events. The session preserves the tool's
//! silent-degradation behavior: operations that cannot proceed return
//! `false` or `undefined` and leave the prior state visible.

use crate::types::JsRaster;
use framelab_core::crop::CropDelta;
use framelab_core::frame::FrameId;
use framelab_core::session::Studio as CoreStudio;
use wasm_bindgen::prelude::*;

/// One avatar-editing session.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const studio = new Studio();
/// if (studio.load_source(bytes)) {
///   studio.apply_crop();
///   studio.select_frame('frame2');
///   studio.set_frame_width(30);
///   const png = studio.export_png();
/// }
/// ```
#[wasm_bindgen]
pub struct Studio {
    inner: CoreStudio,
}

#[wasm_bindgen]
impl Studio {
    /// Create a fresh session: first catalog frame selected, width 20.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Studio {
        Studio {
            inner: CoreStudio::new(),
        }
    }

    /// Replace the source image with a newly uploaded file.
    ///
    /// Resets the crop to the centered default and discards any prior
    /// avatar and composite. Returns `false` (leaving the prior state
    /// visible) when the bytes cannot be decoded.
    pub fn load_source(&mut self, bytes: &[u8]) -> bool {
        self.inner.load_source(bytes).is_ok()
    }

    /// Record the displayed size of the source in the crop UI.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.inner.set_viewport(width, height);
    }

    /// The current crop region as a `{x, y, width, height}` object, or
    /// `undefined` before a source is loaded.
    pub fn crop(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.crop())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Apply a drag/resize delta to the crop region.
    pub fn adjust_crop(&mut self, dx: f32, dy: f32, dsize: f32) {
        self.inner.adjust_crop(CropDelta { dx, dy, dsize });
    }

    /// Commit the crop: regenerate the avatar and re-render the composite.
    /// Silently ignored for a zero-size region or missing source.
    pub fn apply_crop(&mut self) {
        self.inner.apply_crop();
    }

    /// Select a frame by id. Returns `false` for an id outside the
    /// catalog, leaving the selection unchanged.
    pub fn select_frame(&mut self, id: &str) -> bool {
        match FrameId::parse(id) {
            Some(id) => {
                self.inner.select_frame(id);
                true
            }
            None => false,
        }
    }

    /// Change the frame width (clamped to 5-40) and re-render.
    pub fn set_frame_width(&mut self, width: u8) {
        self.inner.set_frame_width(width);
    }

    /// The selected frame id.
    #[wasm_bindgen(getter)]
    pub fn frame_id(&self) -> String {
        self.inner.frame_id().as_str().to_string()
    }

    /// The current frame width in pixels.
    #[wasm_bindgen(getter)]
    pub fn frame_width(&self) -> u8 {
        self.inner.frame_width().get()
    }

    /// Native width of the loaded source, or 0 before any upload.
    #[wasm_bindgen(getter)]
    pub fn source_width(&self) -> u32 {
        self.inner.source_dimensions().map_or(0, |(w, _)| w)
    }

    /// Native height of the loaded source, or 0 before any upload.
    #[wasm_bindgen(getter)]
    pub fn source_height(&self) -> u32 {
        self.inner.source_dimensions().map_or(0, |(_, h)| h)
    }

    /// The circular avatar, or `undefined` before a crop is applied.
    pub fn avatar(&self) -> Option<JsRaster> {
        self.inner.avatar().cloned().map(JsRaster::from_raster)
    }

    /// The visible composite, or `undefined` before a crop is applied.
    pub fn composite(&self) -> Option<JsRaster> {
        self.inner.composite().cloned().map(JsRaster::from_raster)
    }

    /// Whether the download button should be enabled.
    pub fn can_export(&self) -> bool {
        self.inner.can_export()
    }

    /// Serialize the visible composite to PNG bytes for download, or
    /// `undefined` while export is disabled.
    pub fn export_png(&self) -> Option<Vec<u8>> {
        self.inner.export().map(|export| export.bytes)
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn upload(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([90, 60, 30, 255]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_session_flow() {
        let mut studio = Studio::new();
        assert!(!studio.can_export());
        assert_eq!(studio.frame_id(), "frame1");
        assert_eq!(studio.frame_width(), 20);

        assert!(studio.load_source(&upload(200, 200)));
        assert_eq!(studio.source_width(), 200);
        assert_eq!(studio.source_height(), 200);

        studio.apply_crop();
        assert!(studio.can_export());

        let png = studio.export_png().unwrap();
        assert_eq!(&png[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_bad_upload_returns_false() {
        let mut studio = Studio::new();
        assert!(!studio.load_source(&[0, 1, 2, 3]));
        assert_eq!(studio.source_width(), 0);
    }

    #[test]
    fn test_unknown_frame_id_rejected() {
        let mut studio = Studio::new();
        assert!(!studio.select_frame("lynx-yellow"));
        assert_eq!(studio.frame_id(), "frame1");

        assert!(studio.select_frame("frame4"));
        assert_eq!(studio.frame_id(), "frame4");
    }

    #[test]
    fn test_export_disabled_without_avatar() {
        let mut studio = Studio::new();
        assert!(studio.export_png().is_none());

        assert!(studio.load_source(&upload(100, 100)));
        // Loaded but not cropped yet
        assert!(studio.export_png().is_none());
    }

    #[test]
    fn test_composite_available_after_crop() {
        let mut studio = Studio::new();
        assert!(studio.load_source(&upload(150, 150)));
        studio.apply_crop();

        let composite = studio.composite().unwrap();
        assert_eq!(composite.width(), 460);
        assert_eq!(composite.height(), 460);
    }
}
