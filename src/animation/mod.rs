//! Animation module - rasterization and animated GIF encoding.

mod encoder;
mod raster;

pub use encoder::*;
pub use raster::*;
