//! Crop selector.
//!
//! The user picks a square sub-rectangle of the source image to become the
//! avatar. Coordinates are in the crop UI's displayed (viewport) pixel
//! space; [`crate::compose`] maps them back to native pixels.
//!
//! # Constraints
//!
//! - The region is always square (1:1 aspect ratio)
//! - Minimum side is 50 viewport pixels (or the source's shorter side when
//!   the source itself is smaller)
//! - The region always stays fully inside the source bounds
//!
//! Invalid deltas are clamped, never rejected.

use serde::{Deserialize, Serialize};

/// Minimum crop side length in viewport pixels.
pub const MIN_CROP_SIZE: f32 = 50.0;

/// Fraction of the shorter source side used for the initial crop.
const INITIAL_CROP_FRACTION: f32 = 0.8;

/// A square crop region in viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRegion {
    /// Left edge in viewport pixels.
    pub x: f32,
    /// Top edge in viewport pixels.
    pub y: f32,
    /// Region width in viewport pixels.
    pub width: f32,
    /// Region height in viewport pixels (equal to width).
    pub height: f32,
}

impl CropRegion {
    /// An empty region, produced before any source is measured.
    pub fn empty() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Whether the region can be committed to the compositor.
    ///
    /// A zero-size region cannot; the commit is silently ignored by callers.
    pub fn is_committable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A user drag/resize adjustment to the crop region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CropDelta {
    /// Horizontal movement in viewport pixels.
    pub dx: f32,
    /// Vertical movement in viewport pixels.
    pub dy: f32,
    /// Change in side length in viewport pixels.
    pub dsize: f32,
}

/// Compute the initial centered crop for a newly loaded source.
///
/// The region is a centered square sized to 80% of the shorter side.
/// Called exactly once per newly loaded source image; a degenerate source
/// (zero in either dimension) yields an uncommittable empty region.
pub fn initialize_crop(source_width: f32, source_height: f32) -> CropRegion {
    if source_width <= 0.0 || source_height <= 0.0 {
        return CropRegion::empty();
    }

    let min_side = source_width.min(source_height);
    let size = INITIAL_CROP_FRACTION * min_side;

    CropRegion {
        x: (source_width - size) / 2.0,
        y: (source_height - size) / 2.0,
        width: size,
        height: size,
    }
}

/// Apply a user drag/resize to the crop region.
///
/// The result is clamped back to the source bounds, kept square, and held
/// to the minimum side length. There are no error conditions: any delta
/// produces a valid region.
pub fn update_crop(
    current: CropRegion,
    delta: CropDelta,
    source_width: f32,
    source_height: f32,
) -> CropRegion {
    if source_width <= 0.0 || source_height <= 0.0 {
        return current;
    }

    let min_side = source_width.min(source_height);
    let min_size = MIN_CROP_SIZE.min(min_side);

    // Re-square from the larger side in case the caller hand-built a
    // non-square region, then apply and clamp the resize.
    let size = (current.width.max(current.height) + delta.dsize).clamp(min_size, min_side);

    // size <= min_side guarantees the clamp ranges below are non-empty
    let x = (current.x + delta.dx).clamp(0.0, source_width - size);
    let y = (current.y + delta.dy).clamp(0.0, source_height - size);

    CropRegion {
        x,
        y,
        width: size,
        height: size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// f32 arithmetic makes 0.8 * side inexact; compare with a tolerance.
    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected ~{expected}, got {actual}"
        );
    }

    #[test]
    fn test_initialize_centered_square() {
        let region = initialize_crop(1000.0, 500.0);

        assert_close(region.width, 400.0); // 0.8 * 500
        assert_eq!(region.width, region.height);
        assert_close(region.x, 300.0); // (1000 - 400) / 2
        assert_close(region.y, 50.0); // (500 - 400) / 2
    }

    #[test]
    fn test_initialize_portrait_source() {
        let region = initialize_crop(300.0, 900.0);

        assert_close(region.width, 240.0); // 0.8 * 300
        assert_close(region.x, 30.0);
        assert_close(region.y, 330.0);
    }

    #[test]
    fn test_initialize_degenerate_source() {
        let region = initialize_crop(0.0, 500.0);
        assert!(!region.is_committable());

        let region = initialize_crop(500.0, 0.0);
        assert!(!region.is_committable());
    }

    #[test]
    fn test_empty_region_not_committable() {
        assert!(!CropRegion::empty().is_committable());
        assert!(initialize_crop(200.0, 200.0).is_committable());
    }

    #[test]
    fn test_update_drag_within_bounds() {
        let region = initialize_crop(1000.0, 1000.0);
        let moved = update_crop(
            region,
            CropDelta {
                dx: 50.0,
                dy: -20.0,
                dsize: 0.0,
            },
            1000.0,
            1000.0,
        );

        assert_eq!(moved.x, region.x + 50.0);
        assert_eq!(moved.y, region.y - 20.0);
        assert_eq!(moved.width, region.width);
    }

    #[test]
    fn test_update_drag_clamps_to_bounds() {
        let region = initialize_crop(1000.0, 1000.0);
        let moved = update_crop(
            region,
            CropDelta {
                dx: -10_000.0,
                dy: 10_000.0,
                dsize: 0.0,
            },
            1000.0,
            1000.0,
        );

        assert_eq!(moved.x, 0.0);
        assert_eq!(moved.y, 1000.0 - moved.height);
    }

    #[test]
    fn test_update_resize_clamps_to_minimum() {
        let region = initialize_crop(1000.0, 1000.0);
        let shrunk = update_crop(
            region,
            CropDelta {
                dsize: -10_000.0,
                ..Default::default()
            },
            1000.0,
            1000.0,
        );

        assert_eq!(shrunk.width, MIN_CROP_SIZE);
        assert_eq!(shrunk.height, MIN_CROP_SIZE);
    }

    #[test]
    fn test_update_resize_clamps_to_shorter_side() {
        let region = initialize_crop(1000.0, 600.0);
        let grown = update_crop(
            region,
            CropDelta {
                dsize: 10_000.0,
                ..Default::default()
            },
            1000.0,
            600.0,
        );

        assert_eq!(grown.width, 600.0);
        assert!(grown.x >= 0.0 && grown.x + grown.width <= 1000.0);
        assert_eq!(grown.y, 0.0);
    }

    #[test]
    fn test_update_on_tiny_source() {
        // Source shorter than the nominal 50px minimum
        let region = initialize_crop(40.0, 40.0);
        let shrunk = update_crop(
            region,
            CropDelta {
                dsize: -100.0,
                ..Default::default()
            },
            40.0,
            40.0,
        );

        assert_eq!(shrunk.width, 40.0); // Clamped to shorter side, not 50
    }

    #[test]
    fn test_update_resquares_hand_built_region() {
        let lopsided = CropRegion {
            x: 10.0,
            y: 10.0,
            width: 120.0,
            height: 80.0,
        };
        let fixed = update_crop(lopsided, CropDelta::default(), 500.0, 500.0);

        assert_eq!(fixed.width, fixed.height);
        assert_eq!(fixed.width, 120.0);
    }

    #[test]
    fn test_update_degenerate_source_is_noop() {
        let region = initialize_crop(200.0, 200.0);
        let same = update_crop(
            region,
            CropDelta {
                dx: 5.0,
                ..Default::default()
            },
            0.0,
            0.0,
        );
        assert_eq!(same, region);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
