//! Raster decoding and encoding module
//!
//! Format-agnostic reader/writer traits plus the TIFF implementations used by
//! the command line tool.

mod reader;
mod writer;
mod tiff_reader;
mod tiff_writer;
pub mod types;

pub use reader::RasterReader;
pub use writer::RasterWriter;
pub use tiff_reader::TiffRasterReader;
pub use tiff_writer::TiffRasterWriter;
pub use types::TiffCompression;
