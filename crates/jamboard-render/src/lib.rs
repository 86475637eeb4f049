//! Jamboard Render Library
//!
//! The raster drawing surface, the history replay renderer and PNG snapshot
//! encoding for Jamboard. The default surface is a software RGBA buffer, so
//! replay output is bit-exact on every platform.

mod export;
mod raster;
mod replay;
mod surface;

pub use export::{
    PNG_DATA_URI_PREFIX, decode_data_uri, decode_png, encode_png, snapshot_to_data_uri,
    to_data_uri,
};
pub use raster::RasterSurface;
pub use replay::{paint_action, render, render_with_preview};
pub use surface::{RenderResult, RendererError, Snapshot, Surface};
