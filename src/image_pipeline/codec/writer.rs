use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::Raster;

pub trait RasterWriter {
    fn write_raster(&self, image: &Raster, output: &mut dyn Write) -> Result<()>;
}
