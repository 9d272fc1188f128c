use rayon::prelude::*;
use rayon::slice::ChunksMut;

use crate::image_pipeline::common::error::{RestorationError, Result};

/// A row-major grid of unsigned 8-bit intensity samples.
///
/// A `Raster` always has at least one row and one column; the constructors
/// reject zero dimensions with [`RestorationError::EmptyInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Wraps a row-major sample buffer of exactly `width * height` bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = sample_count(width, height)?;
        if data.len() != expected {
            return Err(RestorationError::InvalidBufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// A raster where every sample is `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self> {
        let count = sample_count(width, height)?;
        Self::new(width, height, vec![value; count])
    }

    /// Builds a raster by evaluating `f(x, y)` for every sample.
    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> u8,
    {
        sample_count(width, height)?;
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self::new(width, height, data)
    }

    /// Zero-filled raster with the same shape as an already valid one.
    pub(crate) fn zeroed_like(other: &Raster) -> Self {
        Self {
            width: other.width,
            height: other.height,
            data: vec![0; other.data.len()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.width + x] = value;
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub(crate) fn par_rows_mut(&mut self) -> ChunksMut<'_, u8> {
        self.data.par_chunks_mut(self.width)
    }

    pub fn same_shape(&self, other: &Raster) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Fails with `DimensionMismatch` when a `window x window` neighborhood
    /// does not fit inside the raster.
    pub fn ensure_window(&self, window: usize) -> Result<()> {
        if window > self.width || window > self.height {
            return Err(RestorationError::DimensionMismatch(format!(
                "{window}x{window} window does not fit a {}x{} raster",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// `width * height`, rejecting empty and unrepresentable shapes.
fn sample_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(RestorationError::EmptyInput(width, height));
    }
    width.checked_mul(height).ok_or_else(|| {
        RestorationError::DimensionMismatch(format!(
            "{width}x{height} raster has more samples than fit in memory"
        ))
    })
}
