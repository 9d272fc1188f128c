use std::io::Write;

use tiff::encoder::{colortype, compression::DeflateLevel, Compression, TiffEncoder};
use tracing::debug;

use crate::image_pipeline::codec::types::TiffCompression;
use crate::image_pipeline::codec::writer::RasterWriter;
use crate::image_pipeline::common::error::{RestorationError, Result};
use crate::image_pipeline::raster::Raster;

/// Writes 8-bit grayscale TIFF files.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiffRasterWriter {
    pub compression: TiffCompression,
}

impl TiffRasterWriter {
    pub fn new(compression: TiffCompression) -> Self {
        Self { compression }
    }
}

impl RasterWriter for TiffRasterWriter {
    fn write_raster(&self, image: &Raster, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", image.width(), image.height());

        let mut buffer = Vec::new();

        let compression = match self.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        let mut encoder = TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| RestorationError::EncodeError(e.to_string()))?
            .with_compression(compression);

        encoder.write_image::<colortype::Gray8>(
            image.width() as u32,
            image.height() as u32,
            image.as_slice(),
        ).map_err(|e| RestorationError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::codec::{RasterReader, TiffRasterReader};

    #[test]
    fn test_written_tiff_decodes_to_same_raster() {
        let image = Raster::from_fn(17, 9, |x, y| (x * 15 + y) as u8).unwrap();

        for compression in [TiffCompression::None, TiffCompression::DeflateBalanced] {
            let mut bytes = Vec::new();
            TiffRasterWriter::new(compression)
                .write_raster(&image, &mut bytes)
                .unwrap();
            let decoded = TiffRasterReader.read_raster(&bytes).unwrap();
            assert_eq!(decoded, image);
        }
    }

    #[test]
    fn test_reader_rejects_garbage() {
        let result = TiffRasterReader.read_raster(b"definitely not a tiff");
        assert!(matches!(result, Err(RestorationError::DecodeError(_))));
    }
}
