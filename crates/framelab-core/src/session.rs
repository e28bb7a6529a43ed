//! Studio session state.
//!
//! Rather than half a dozen independent UI state variables that have to
//! stay mutually consistent, [`Studio`] holds the session as a single
//! value advanced only through the pipeline operations: load, crop,
//! compose, frame selection, width, export. Operations that cannot proceed
//! (zero-size crop, undecodable upload, encode failure) return without
//! effect, leaving the prior state visible - no error dialogs.

use crate::compose::{compose, Viewport};
use crate::crop::{initialize_crop, update_crop, CropDelta, CropRegion};
use crate::decode::{decode_upload, DecodeError};
use crate::encode::encode_png_raster;
use crate::frame::{FrameCatalog, FrameId, FrameWidth};
use crate::raster::Raster;
use crate::render::{render, RenderSequencer};

/// Fixed filename for the downloaded avatar.
pub const EXPORT_FILENAME: &str = "github-avatar.png";

/// An exportable PNG with its download filename.
#[derive(Debug, Clone)]
pub struct Export {
    /// Download filename (always [`EXPORT_FILENAME`]).
    pub filename: &'static str,
    /// PNG-encoded bytes of the visible composite.
    pub bytes: Vec<u8>,
}

/// The complete state of one avatar-editing session.
#[derive(Debug)]
pub struct Studio {
    catalog: FrameCatalog,
    source: Option<Raster>,
    viewport: Option<Viewport>,
    crop: Option<CropRegion>,
    avatar: Option<Raster>,
    frame_id: FrameId,
    frame_width: FrameWidth,
    composite: Option<Raster>,
    sequencer: RenderSequencer,
}

impl Studio {
    /// Create a fresh session with the built-in catalog, the first frame
    /// selected, and the default frame width.
    pub fn new() -> Self {
        let catalog = FrameCatalog::builtin();
        let frame_id = catalog.default_id();
        Self {
            catalog,
            source: None,
            viewport: None,
            crop: None,
            avatar: None,
            frame_id,
            frame_width: FrameWidth::default(),
            composite: None,
            sequencer: RenderSequencer::new(),
        }
    }

    /// Replace the source image with a newly uploaded file.
    ///
    /// Discards any prior crop, avatar, and composite; the crop resets to
    /// the centered default and the viewport to the native resolution.
    /// Frame selection and width survive the reload.
    pub fn load_source(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        let source = decode_upload(bytes)?;
        let viewport = Viewport::natural(&source);
        self.crop = Some(initialize_crop(viewport.width, viewport.height));
        self.viewport = Some(viewport);
        self.source = Some(source);
        self.avatar = None;
        self.composite = None;
        Ok(())
    }

    /// Record the displayed size of the source in the crop UI.
    ///
    /// Crop coordinates live in this space; changing it re-centers the
    /// crop, matching the UI re-measuring the image on layout. No-op
    /// before any source is loaded or for a degenerate size.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if self.source.is_none() || width <= 0.0 || height <= 0.0 {
            return;
        }
        self.viewport = Some(Viewport { width, height });
        self.crop = Some(initialize_crop(width, height));
    }

    /// Apply a user drag/resize to the crop region. No-op without a source.
    pub fn adjust_crop(&mut self, delta: CropDelta) {
        let (Some(current), Some(viewport)) = (self.crop, self.viewport) else {
            return;
        };
        self.crop = Some(update_crop(current, delta, viewport.width, viewport.height));
    }

    /// Commit the crop: regenerate the avatar and re-render the composite.
    ///
    /// Silently ignored when there is no source or the region is
    /// uncommittable (zero size).
    pub fn apply_crop(&mut self) {
        let (Some(source), Some(region), Some(viewport)) =
            (self.source.as_ref(), self.crop.as_ref(), self.viewport.as_ref())
        else {
            return;
        };
        let Some(avatar) = compose(source, region, viewport) else {
            return;
        };
        self.avatar = Some(avatar);
        self.composite = None;
        self.rerender();
    }

    /// Change the selected frame and re-render.
    pub fn select_frame(&mut self, id: FrameId) {
        self.frame_id = id;
        self.rerender();
    }

    /// Change the frame width (clamped to [5, 40]) and re-render.
    pub fn set_frame_width(&mut self, width: u8) {
        self.frame_width = FrameWidth::new(width);
        self.rerender();
    }

    /// Re-render the composite from the current avatar, frame, and width.
    ///
    /// Every re-render goes through the sequencer so a superseded
    /// invocation can never overwrite a newer result. No-op until a crop
    /// has been applied.
    fn rerender(&mut self) {
        let Some(avatar) = self.avatar.as_ref() else {
            return;
        };
        let ticket = self.sequencer.begin();

        // Missing frame art leaves the avatar-only partial render
        let frame = match self.catalog.get(self.frame_id) {
            Some(asset) => asset.image.clone(),
            None => Raster::new(0, 0, vec![]),
        };

        let composite = render(avatar, &frame, self.frame_width);
        self.sequencer.commit(ticket, composite, &mut self.composite);
    }

    /// Whether export is currently possible.
    pub fn can_export(&self) -> bool {
        self.avatar.is_some()
    }

    /// Serialize the visible composite for download.
    ///
    /// Returns `None` while no avatar exists (the UI-disabled state) or if
    /// encoding fails - the session never surfaces an error dialog.
    pub fn export(&self) -> Option<Export> {
        let composite = self.composite.as_ref()?;
        let bytes = encode_png_raster(composite).ok()?;
        Some(Export {
            filename: EXPORT_FILENAME,
            bytes,
        })
    }

    /// The current crop region, if a source is loaded.
    pub fn crop(&self) -> Option<CropRegion> {
        self.crop
    }

    /// Native dimensions of the loaded source.
    pub fn source_dimensions(&self) -> Option<(u32, u32)> {
        self.source.as_ref().map(|s| (s.width, s.height))
    }

    /// The committed circular avatar, if any.
    pub fn avatar(&self) -> Option<&Raster> {
        self.avatar.as_ref()
    }

    /// The visible composite, if any.
    pub fn composite(&self) -> Option<&Raster> {
        self.composite.as_ref()
    }

    /// The selected frame id.
    pub fn frame_id(&self) -> FrameId {
        self.frame_id
    }

    /// The current frame width.
    pub fn frame_width(&self) -> FrameWidth {
        self.frame_width
    }

    /// The frame catalog for the selection grid.
    pub fn catalog(&self) -> &FrameCatalog {
        &self.catalog
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}
