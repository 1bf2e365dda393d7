pub mod error;
pub mod raster;
pub mod bitmatrix;
