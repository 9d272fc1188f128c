use tracing::{debug, instrument, trace};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::validation::validate_odd_size;
use crate::image_pipeline::filters::{box_blur, median_blur, weighted_sum};
use crate::image_pipeline::raster::Raster;

const MEAN_WEIGHT: f64 = 0.5;
const MEDIAN_WEIGHT: f64 = 0.5;

/// Blends a mean blur with a median blur of that mean blur, then reapplies
/// the mean blur `iterations` times.
///
/// With `iterations == 0` the result is the blend itself.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn reduce_noise(
    image: &Raster,
    mean_kernel: usize,
    median_kernel: usize,
    iterations: usize,
) -> Result<Raster> {
    validate_odd_size("mean kernel size", mean_kernel)?;
    validate_odd_size("median kernel size", median_kernel)?;
    image.ensure_window(mean_kernel)?;
    image.ensure_window(median_kernel)?;

    let mean = box_blur(image, mean_kernel)?;
    let median = median_blur(&mean, median_kernel)?;
    let mut smoothed = weighted_sum(&mean, MEAN_WEIGHT, &median, MEDIAN_WEIGHT)?;

    debug!("Running {} recursive mean passes", iterations);
    for iteration in 0..iterations {
        smoothed = box_blur(&smoothed, mean_kernel)?;
        trace!(iteration, "recursive mean pass done");
    }

    Ok(smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::common::error::RestorationError;

    fn spike(size: usize, background: u8, peak: u8) -> Raster {
        let mut image = Raster::filled(size, size, background).unwrap();
        image.set(size / 2, size / 2, peak);
        image
    }

    #[test]
    fn test_unit_kernels_without_iterations_is_identity() {
        let image = Raster::from_fn(7, 5, |x, y| (x * 37 + y * 11) as u8).unwrap();
        assert_eq!(reduce_noise(&image, 1, 1, 0).unwrap(), image);
    }

    #[test]
    fn test_preserves_dimensions() {
        let image = Raster::from_fn(13, 9, |x, y| ((x ^ y) * 17) as u8).unwrap();
        let out = reduce_noise(&image, 3, 5, 2).unwrap();
        assert_eq!(out.dimensions(), image.dimensions());
    }

    #[test]
    fn test_larger_mean_kernel_spreads_spike_further() {
        let image = spike(11, 100, 255);
        let center = |k: usize| {
            let out = reduce_noise(&image, k, 1, 0).unwrap();
            (out.get(5, 5) as i32 - 100).abs()
        };
        let (d1, d3, d5) = (center(1), center(3), center(5));
        assert_eq!(d1, 155);
        assert!(d3 < d1);
        assert!(d5 < d3);
    }

    #[test]
    fn test_recursive_passes_keep_smoothing() {
        let image = spike(11, 0, 255);
        let once = reduce_noise(&image, 3, 1, 0).unwrap();
        let more = reduce_noise(&image, 3, 1, 3).unwrap();
        assert!(more.get(5, 5) < once.get(5, 5));
    }

    #[test]
    fn test_unit_kernels_make_recursive_passes_identity() {
        let image = spike(9, 0, 90);
        let out = reduce_noise(&image, 1, 1, 4).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn test_rejects_bad_kernels_before_filtering() {
        let image = Raster::filled(9, 9, 0).unwrap();
        assert!(matches!(
            reduce_noise(&image, 2, 3, 1),
            Err(RestorationError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            reduce_noise(&image, 3, 0, 1),
            Err(RestorationError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            reduce_noise(&image, 3, 11, 1),
            Err(RestorationError::DimensionMismatch(_))
        ));
    }
}
