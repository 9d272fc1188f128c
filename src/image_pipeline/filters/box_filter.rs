use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::validation::validate_odd_size;
use crate::image_pipeline::filters::border::clamp_index;
use crate::image_pipeline::raster::Raster;

/// Uniform-averaging filter over a `kernel_size x kernel_size` window.
///
/// Runs as two separable passes over integer sums, so the result is the
/// exact window mean rounded to the nearest integer. The window area is odd,
/// so the mean never lands exactly on a half.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn box_blur(image: &Raster, kernel_size: usize) -> Result<Raster> {
    validate_odd_size("box kernel size", kernel_size)?;
    image.ensure_window(kernel_size)?;

    if kernel_size == 1 {
        return Ok(image.clone());
    }

    let (width, height) = image.dimensions();
    let radius = (kernel_size / 2) as isize;
    let area = (kernel_size * kernel_size) as u32;

    debug!("Box blur {}x{} with radius {}", width, height, radius);

    // Horizontal pass
    let mut row_sums = vec![0u32; width * height];
    row_sums
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, sums)| {
            let row = image.row(y);
            for (x, sum) in sums.iter_mut().enumerate() {
                *sum = (-radius..=radius)
                    .map(|k| row[clamp_index(x as isize + k, width)] as u32)
                    .sum();
            }
        });

    // Vertical pass
    let mut output = Raster::zeroed_like(image);
    output
        .par_rows_mut()
        .enumerate()
        .for_each(|(y, out_row)| {
            for (x, out) in out_row.iter_mut().enumerate() {
                let sum: u32 = (-radius..=radius)
                    .map(|k| row_sums[clamp_index(y as isize + k, height) * width + x])
                    .sum();
                *out = ((sum + area / 2) / area) as u8;
            }
        });

    Ok(output)
}
