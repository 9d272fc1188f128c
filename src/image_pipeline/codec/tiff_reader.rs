//! Grayscale TIFF decoding.

use std::io::Cursor;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

use crate::image_pipeline::codec::reader::RasterReader;
use crate::image_pipeline::common::error::{RestorationError, Result};
use crate::image_pipeline::raster::Raster;

/// Reads single-channel TIFF files.
///
/// 8-bit samples are taken as-is. 16-bit samples keep their high byte, so the
/// full 16-bit range maps onto the full 8-bit range.
pub struct TiffRasterReader;

impl RasterReader for TiffRasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<Raster> {
        debug!("Decoding TIFF image, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| RestorationError::DecodeError(e.to_string()))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| RestorationError::DecodeError(e.to_string()))?;
        let color_type = decoder
            .colortype()
            .map_err(|e| RestorationError::DecodeError(e.to_string()))?;

        debug!("Decoded header: {}x{} {:?}", width, height, color_type);

        let samples = match color_type {
            ColorType::Gray(8) | ColorType::Gray(16) => decoder
                .read_image()
                .map_err(|e| RestorationError::DecodeError(e.to_string()))?,
            other => {
                return Err(RestorationError::UnsupportedFormat(format!(
                    "expected 8 or 16-bit grayscale TIFF, found {other:?}"
                )));
            }
        };

        let pixels = match samples {
            DecodingResult::U8(values) => values,
            DecodingResult::U16(values) => values.iter().map(|&v| (v >> 8) as u8).collect(),
            _ => {
                return Err(RestorationError::UnsupportedFormat(
                    "unexpected sample type in grayscale TIFF".to_string(),
                ));
            }
        };

        Raster::new(width as usize, height as usize, pixels)
    }
}
