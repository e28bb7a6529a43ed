//! Frame catalog and frame-width parameter.
//!
//! The catalog is a small fixed set of four decorative overlays, ids
//! `frame1`..`frame4`, not user-extensible. Each asset is a 460x460 ring
//! with a transparent circular window, built once at startup and never
//! mutated. The frame-width slider only controls how far the avatar is
//! clipped back under the frame; it does not change the frame art itself.

use serde::{Deserialize, Serialize};

use crate::compose::AVATAR_SIZE;
use crate::mask::circle_coverage;
use crate::raster::Raster;

/// Minimum frame width in pixels.
pub const FRAME_WIDTH_MIN: u8 = 5;
/// Maximum frame width in pixels.
pub const FRAME_WIDTH_MAX: u8 = 40;
/// Default frame width in pixels.
pub const FRAME_WIDTH_DEFAULT: u8 = 20;

/// Frame width slider value, clamped to [5, 40] on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameWidth(u8);

impl FrameWidth {
    /// Create a frame width, clamping out-of-range values.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(FRAME_WIDTH_MIN, FRAME_WIDTH_MAX))
    }

    /// The width in pixels.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Radius of the visible-avatar circle under this frame width.
    ///
    /// The avatar is redrawn inside a circle whose radius is reduced by
    /// half the frame width: `230 - width / 2`.
    pub fn clip_radius(self) -> f32 {
        AVATAR_SIZE as f32 / 2.0 - f32::from(self.0) / 2.0
    }
}

impl Default for FrameWidth {
    fn default() -> Self {
        Self(FRAME_WIDTH_DEFAULT)
    }
}

/// Identifier of a catalog frame.
///
/// A closed enum: an out-of-catalog selection is unrepresentable, which
/// makes the default selection trivially valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameId {
    Frame1,
    Frame2,
    Frame3,
    Frame4,
}

impl FrameId {
    /// All catalog ids in display order.
    pub const ALL: [FrameId; 4] = [
        FrameId::Frame1,
        FrameId::Frame2,
        FrameId::Frame3,
        FrameId::Frame4,
    ];

    /// The wire identifier, as used by the hosting UI.
    pub fn as_str(self) -> &'static str {
        match self {
            FrameId::Frame1 => "frame1",
            FrameId::Frame2 => "frame2",
            FrameId::Frame3 => "frame3",
            FrameId::Frame4 => "frame4",
        }
    }

    /// Parse a wire identifier. Unknown ids yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "frame1" => Some(FrameId::Frame1),
            "frame2" => Some(FrameId::Frame2),
            "frame3" => Some(FrameId::Frame3),
            "frame4" => Some(FrameId::Frame4),
            _ => None,
        }
    }
}

/// A decorative overlay with a transparent circular window.
#[derive(Debug, Clone)]
pub struct FrameAsset {
    /// Catalog identifier.
    pub id: FrameId,
    /// Display name for the selection grid.
    pub name: &'static str,
    /// 460x460 RGBA overlay art.
    pub image: Raster,
}

/// The fixed catalog of built-in frames.
#[derive(Debug, Clone)]
pub struct FrameCatalog {
    assets: Vec<FrameAsset>,
}

impl FrameCatalog {
    /// Build the four built-in frames.
    ///
    /// Each is a solid ring at the avatar boundary; colors and ring
    /// thickness distinguish the styles. Thickness stays under 20 so the
    /// window radius exceeds every clip radius (down to 210 at width 40)
    /// and the width slider opens a visible gap inside the ring.
    pub fn builtin() -> Self {
        let assets = vec![
            FrameAsset {
                id: FrameId::Frame1,
                name: "Indigo Ring",
                image: ring_overlay([79, 70, 229], 16.0),
            },
            FrameAsset {
                id: FrameId::Frame2,
                name: "Gold Ring",
                image: ring_overlay([217, 119, 6], 12.0),
            },
            FrameAsset {
                id: FrameId::Frame3,
                name: "Emerald Ring",
                image: ring_overlay([5, 150, 105], 18.0),
            },
            FrameAsset {
                id: FrameId::Frame4,
                name: "Crimson Ring",
                image: ring_overlay([220, 38, 38], 14.0),
            },
        ];
        Self { assets }
    }

    /// Look up a frame by id.
    pub fn get(&self, id: FrameId) -> Option<&FrameAsset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    /// The default selection: the first catalog entry.
    pub fn default_id(&self) -> FrameId {
        self.assets[0].id
    }

    /// Catalog entries in display order.
    pub fn assets(&self) -> &[FrameAsset] {
        &self.assets
    }

    /// Number of frames in the catalog.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the catalog is empty (it never is for the built-in set).
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Rasterize a solid ring hugging the avatar boundary.
///
/// The ring band runs from `outer - thickness` to the full avatar radius;
/// everything inside the window stays transparent.
fn ring_overlay(rgb: [u8; 3], thickness: f32) -> Raster {
    let size = AVATAR_SIZE;
    let center = size as f32 / 2.0;
    let outer = size as f32 / 2.0;
    let inner = outer - thickness;

    let mut overlay = Raster::blank(size, size);
    for y in 0..size {
        for x in 0..size {
            let band = circle_coverage(center, center, outer, x, y)
                - circle_coverage(center, center, inner, x, y);
            if band <= 0.0 {
                continue;
            }
            let alpha = (band * 255.0) as u8;
            overlay.put_pixel(x, y, [rgb[0], rgb[1], rgb[2], alpha]);
        }
    }
    overlay
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_width_clamping() {
        assert_eq!(FrameWidth::new(0).get(), FRAME_WIDTH_MIN);
        assert_eq!(FrameWidth::new(5).get(), 5);
        assert_eq!(FrameWidth::new(20).get(), 20);
        assert_eq!(FrameWidth::new(40).get(), 40);
        assert_eq!(FrameWidth::new(200).get(), FRAME_WIDTH_MAX);
    }

    #[test]
    fn test_frame_width_default() {
        assert_eq!(FrameWidth::default().get(), FRAME_WIDTH_DEFAULT);
    }

    #[test]
    fn test_clip_radius() {
        assert_eq!(FrameWidth::new(40).clip_radius(), 210.0);
        assert_eq!(FrameWidth::new(5).clip_radius(), 227.5);
        assert_eq!(FrameWidth::new(20).clip_radius(), 220.0);
    }

    #[test]
    fn test_frame_id_round_trip() {
        for id in FrameId::ALL {
            assert_eq!(FrameId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_frame_id_unknown_rejected() {
        assert_eq!(FrameId::parse("frame5"), None);
        assert_eq!(FrameId::parse("lynx-yellow"), None);
        assert_eq!(FrameId::parse(""), None);
    }

    #[test]
    fn test_catalog_has_four_frames() {
        let catalog = FrameCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_lookup_covers_all_ids() {
        let catalog = FrameCatalog::builtin();
        for id in FrameId::ALL {
            let asset = catalog.get(id).expect("built-in catalog covers all ids");
            assert_eq!(asset.id, id);
            assert!(!asset.name.is_empty());
        }
    }

    #[test]
    fn test_catalog_default_is_first_entry() {
        let catalog = FrameCatalog::builtin();
        assert_eq!(catalog.default_id(), FrameId::Frame1);
        assert_eq!(catalog.default_id(), catalog.assets()[0].id);
    }

    #[test]
    fn test_frame_art_dimensions() {
        let catalog = FrameCatalog::builtin();
        for asset in catalog.assets() {
            assert_eq!(asset.image.width, AVATAR_SIZE);
            assert_eq!(asset.image.height, AVATAR_SIZE);
        }
    }

    #[test]
    fn test_frame_window_is_transparent() {
        let catalog = FrameCatalog::builtin();
        for asset in catalog.assets() {
            // Center of the circular window
            assert_eq!(asset.image.pixel(230, 230)[3], 0, "{} window", asset.name);
            // Corners are outside the ring
            assert_eq!(asset.image.pixel(0, 0)[3], 0);
        }
    }

    #[test]
    fn test_frame_ring_is_painted() {
        let catalog = FrameCatalog::builtin();
        let asset = catalog.get(FrameId::Frame1).unwrap();

        // A point inside the ring band: 10px in from the right edge midline
        let px = asset.image.pixel(449, 230);
        assert_eq!(px[3], 255);
        assert_eq!(&px[..3], &[79, 70, 229]);
    }

    #[test]
    fn test_ring_thickness_bounds_window() {
        let overlay = ring_overlay([1, 2, 3], 30.0);

        // Just inside the inner boundary (radius 200): transparent
        assert_eq!(overlay.pixel(230 + 195, 230)[3], 0);
        // In the band (radius ~215): opaque
        assert_eq!(overlay.pixel(230 + 215, 230)[3], 255);
    }
}
