//! Upload decoding for Framelab.
//!
//! This module turns the raw bytes of an uploaded file into an RGBA
//! [`Raster`](crate::raster::Raster). The format is guessed from the file
//! contents (anything the `image` crate's reader accepts - JPEG, PNG, GIF,
//! WebP), so an "any image MIME type" file picker just works. EXIF
//! orientation is applied so phone photos come out upright.
//!
//! All operations are synchronous and single-threaded within WASM.

mod types;
mod upload;

pub use types::{DecodeError, Orientation};
pub use upload::{decode_upload, decode_upload_no_orientation, get_orientation};
