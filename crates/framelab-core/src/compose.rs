//! Circular compositor.
//!
//! Takes the committed crop region and renders it into the fixed 460x460
//! avatar surface, masked to a circle of radius 230. The crop region lives
//! in the crop UI's displayed coordinate space, which may differ from the
//! source's native resolution, so the region is first mapped back through
//! `scale = natural / displayed`.

use crate::crop::CropRegion;
use crate::mask::apply_circle_mask;
use crate::raster::Raster;

/// Side length of the avatar surface in pixels.
pub const AVATAR_SIZE: u32 = 460;

/// Displayed size of the source image in the crop UI.
///
/// The crop UI may render the image at a different size than its native
/// resolution; crop coordinates are captured in this space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Displayed width in pixels.
    pub width: f32,
    /// Displayed height in pixels.
    pub height: f32,
}

impl Viewport {
    /// A viewport matching the source's native resolution (1:1 display).
    pub fn natural(source: &Raster) -> Self {
        Self {
            width: source.width as f32,
            height: source.height as f32,
        }
    }

    fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Render the crop region of the source into a circular 460x460 avatar.
///
/// The region is mapped from viewport space to native pixels, the native
/// sub-region is resampled (bilinear) to fill the full avatar surface, and
/// the result is masked to a circle of radius 230 centered at (230, 230).
/// Surface corners end up fully transparent.
///
/// Returns `None` - a no-op for the caller - when the region has zero
/// size, the source is empty, or the viewport is degenerate.
pub fn compose(source: &Raster, region: &CropRegion, viewport: &Viewport) -> Option<Raster> {
    if !region.is_committable() || source.is_empty() || !viewport.is_valid() {
        return None;
    }

    // Map displayed crop coordinates back to native pixel space
    let scale_x = source.width as f32 / viewport.width;
    let scale_y = source.height as f32 / viewport.height;

    let native_x = (region.x * scale_x).round().max(0.0) as u32;
    let native_y = (region.y * scale_y).round().max(0.0) as u32;
    let native_x = native_x.min(source.width.saturating_sub(1));
    let native_y = native_y.min(source.height.saturating_sub(1));

    let native_w = (region.width * scale_x).round() as u32;
    let native_h = (region.height * scale_y).round() as u32;
    let native_w = native_w.clamp(1, source.width - native_x);
    let native_h = native_h.clamp(1, source.height - native_y);

    let img = source.to_rgba_image()?;
    let sub = image::imageops::crop_imm(&img, native_x, native_y, native_w, native_h).to_image();
    let scaled = image::imageops::resize(
        &sub,
        AVATAR_SIZE,
        AVATAR_SIZE,
        image::imageops::FilterType::Triangle,
    );

    let mut avatar = Raster::from_rgba_image(scaled);
    apply_circle_mask(&mut avatar, AVATAR_SIZE as f32 / 2.0);
    Some(avatar)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
