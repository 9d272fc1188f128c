use tracing::instrument;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::validation::validate_strength;
use crate::image_pipeline::filters::{convolve, weighted_sum, Kernel};
use crate::image_pipeline::raster::Raster;

/// Unsharp mask against the fixed 7x7 uniform PSF:
/// `(1 + strength) * image - strength * blurred`.
///
/// This amplifies high frequencies; it is not an inverse filter.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn sharpen(image: &Raster, strength: f32) -> Result<Raster> {
    validate_strength(strength)?;
    let psf = Kernel::psf();
    image.ensure_window(psf.size())?;

    let blurred = convolve(image, &psf)?;
    let strength = strength as f64;
    weighted_sum(image, 1.0 + strength, &blurred, -strength)
}
