//! Rendering boundary: paint ops, SVG output and rasterization.

pub(crate) mod ops;
pub(crate) mod raster;
pub(crate) mod svg;
