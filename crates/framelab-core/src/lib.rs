//! Framelab Core - Avatar composition library
//!
//! This crate provides the core image pipeline for Framelab: decoding an
//! uploaded image, selecting a square crop, masking it to a circle, and
//! compositing a decorative frame on top for export as a 460x460 PNG
//! avatar.
//!
//! The pipeline is three pure transformations over in-memory rasters:
//!
//! 1. [`crop`] - computes and constrains the user's square crop region
//! 2. [`compose`] - renders the crop into the circular avatar surface
//! 3. [`render`] - clips the avatar under the frame and overlays the frame
//!
//! [`session::Studio`] ties the stages together as a single state value
//! advanced only through the pipeline operations.

pub mod compose;
pub mod crop;
pub mod decode;
pub mod encode;
pub mod frame;
pub mod mask;
pub mod raster;
pub mod render;
pub mod session;

pub use compose::{compose, Viewport, AVATAR_SIZE};
pub use crop::{initialize_crop, update_crop, CropDelta, CropRegion, MIN_CROP_SIZE};
pub use frame::{FrameAsset, FrameCatalog, FrameId, FrameWidth};
pub use raster::Raster;
pub use render::{render, RenderSequencer, RenderTicket};
pub use session::{Export, Studio, EXPORT_FILENAME};
