use rayon::prelude::*;
use tracing::instrument;

use crate::image_pipeline::common::error::{RestorationError, Result};
use crate::image_pipeline::common::validation::validate_odd_size;
use crate::image_pipeline::filters::border::clamp_index;
use crate::image_pipeline::raster::Raster;

/// Side length of the fixed point-spread function used by the sharpening stage.
pub const PSF_SIZE: usize = 7;

/// Square, odd-sized convolution kernel stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    pub fn new(size: usize, weights: Vec<f64>) -> Result<Self> {
        validate_odd_size("kernel size", size)?;
        if weights.len() != size * size {
            return Err(RestorationError::InvalidConfiguration(format!(
                "{size}x{size} kernel needs {} weights, got {}",
                size * size,
                weights.len()
            )));
        }
        Ok(Self { size, weights })
    }

    /// Equal weights summing to one.
    pub fn uniform(size: usize) -> Result<Self> {
        let area = size * size;
        Self::new(size, vec![1.0 / area as f64; area])
    }

    /// The uniform 7x7 point-spread function.
    pub fn psf() -> Self {
        let area = PSF_SIZE * PSF_SIZE;
        Self {
            size: PSF_SIZE,
            weights: vec![1.0 / area as f64; area],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// Correlates `image` with `kernel` centered on each sample, edges replicated,
/// rounding half to even and clamping the result to `[0, 255]`.
#[instrument(skip(image, kernel), fields(kernel_size = kernel.size()))]
pub fn convolve(image: &Raster, kernel: &Kernel) -> Result<Raster> {
    image.ensure_window(kernel.size)?;

    let (width, height) = image.dimensions();
    let radius = (kernel.size / 2) as isize;

    let mut output = Raster::zeroed_like(image);
    output
        .par_rows_mut()
        .enumerate()
        .for_each(|(y, out_row)| {
            for (x, out) in out_row.iter_mut().enumerate() {
                let mut acc = 0.0f64;
                for (ky, weight_row) in kernel.weights.chunks_exact(kernel.size).enumerate() {
                    let row = image.row(clamp_index(y as isize + ky as isize - radius, height));
                    for (kx, &w) in weight_row.iter().enumerate() {
                        acc += w * row[clamp_index(x as isize + kx as isize - radius, width)] as f64;
                    }
                }
                *out = acc.round_ties_even().clamp(0.0, 255.0) as u8;
            }
        });

    Ok(output)
}
