use rayon::prelude::*;
use tracing::instrument;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::validation::validate_odd_size;
use crate::image_pipeline::filters::border::clamp_index;
use crate::image_pipeline::raster::Raster;

/// Median of an odd-length sample window. Reorders `window`.
#[inline]
pub(crate) fn median_of(window: &mut [u8]) -> u8 {
    let mid = window.len() / 2;
    *window.select_nth_unstable(mid).1
}

/// Median filter over a `kernel_size x kernel_size` window, edge samples replicated.
///
/// Every output sample is computed, borders included.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn median_blur(image: &Raster, kernel_size: usize) -> Result<Raster> {
    validate_odd_size("median kernel size", kernel_size)?;
    image.ensure_window(kernel_size)?;

    if kernel_size == 1 {
        return Ok(image.clone());
    }

    let (width, height) = image.dimensions();
    let radius = (kernel_size / 2) as isize;

    let mut output = Raster::zeroed_like(image);
    output
        .par_rows_mut()
        .enumerate()
        .for_each(|(y, out_row)| {
            let mut window = Vec::with_capacity(kernel_size * kernel_size);
            for (x, out) in out_row.iter_mut().enumerate() {
                window.clear();
                for dy in -radius..=radius {
                    let row = image.row(clamp_index(y as isize + dy, height));
                    for dx in -radius..=radius {
                        window.push(row[clamp_index(x as isize + dx, width)]);
                    }
                }
                *out = median_of(&mut window);
            }
        });

    Ok(output)
}
