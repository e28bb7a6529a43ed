//! Frame catalog WASM bindings.
//!
//! The selection grid needs the catalog's ids and display names plus each
//! frame's art for its thumbnail; both come from the built-in catalog in
//! core.

use crate::types::JsRaster;
use framelab_core::frame::{FrameCatalog, FrameId};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
}

/// List the frame catalog for the selection grid.
///
/// # Returns
///
/// An array of `{id, name}` objects in display order. The first entry is
/// the default selection.
#[wasm_bindgen]
pub fn frame_catalog() -> Result<JsValue, JsValue> {
    let catalog = FrameCatalog::builtin();
    let entries: Vec<CatalogEntry> = catalog
        .assets()
        .iter()
        .map(|asset| CatalogEntry {
            id: asset.id.as_str(),
            name: asset.name,
        })
        .collect();
    serde_wasm_bindgen::to_value(&entries).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get a frame's overlay art by id.
///
/// # Arguments
///
/// * `id` - catalog identifier (`"frame1"`..`"frame4"`)
///
/// # Returns
///
/// The 460x460 overlay raster, or an error for an id outside the catalog.
#[wasm_bindgen]
pub fn frame_image(id: &str) -> Result<JsRaster, JsValue> {
    let id = FrameId::parse(id)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown frame id: {id}")))?;
    let catalog = FrameCatalog::builtin();
    let asset = catalog
        .get(id)
        .ok_or_else(|| JsValue::from_str("Frame missing from catalog"))?;
    Ok(JsRaster::from_raster(asset.image.clone()))
}
