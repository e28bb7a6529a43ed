//! Circular clipping mask.
//!
//! Where a canvas host would use a `clip()` path, the clip here is an
//! analytic per-pixel coverage with a one-pixel anti-aliasing band.
//! Coverage is 1.0 well inside the circle, 0.0 well
//! outside, and ramps linearly across the boundary so the edge stays
//! smooth at export resolution.

use crate::raster::Raster;

/// Coverage of the circle `(cx, cy, radius)` over the pixel at `(x, y)`.
///
/// The pixel is sampled at its center. Returns a value from 0.0 (fully
/// outside) to 1.0 (fully inside), with a one-pixel linear ramp across the
/// circle boundary.
#[inline]
pub fn circle_coverage(cx: f32, cy: f32, radius: f32, x: u32, y: u32) -> f32 {
    let dx = x as f32 + 0.5 - cx;
    let dy = y as f32 + 0.5 - cy;
    let dist = (dx * dx + dy * dy).sqrt();
    (radius + 0.5 - dist).clamp(0.0, 1.0)
}

/// Restrict a surface to a circle of the given radius centered on it.
///
/// Pixel alpha is scaled by circle coverage; pixels entirely outside the
/// circle are cleared to transparent black.
pub fn apply_circle_mask(raster: &mut Raster, radius: f32) {
    let cx = raster.width as f32 / 2.0;
    let cy = raster.height as f32 / 2.0;

    for y in 0..raster.height {
        for x in 0..raster.width {
            let coverage = circle_coverage(cx, cy, radius, x, y);
            if coverage >= 1.0 {
                continue;
            }
            let mut px = raster.pixel(x, y);
            if coverage <= 0.0 {
                px = [0; 4];
            } else {
                px[3] = (f32::from(px[3]) * coverage) as u8;
            }
            raster.put_pixel(x, y, px);
        }
    }
}
