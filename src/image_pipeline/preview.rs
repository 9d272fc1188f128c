//! Display previews
//!
//! Scaling for on-screen display and the original-next-to-result view. None
//! of this feeds back into restoration.

use tracing::debug;

use crate::image_pipeline::common::error::{RestorationError, Result};
use crate::image_pipeline::raster::Raster;

/// Scales `(width, height)` so the longer side equals `max_size`, keeping the
/// aspect ratio. The shorter side is truncated, but never below one pixel.
/// Small images are scaled up.
pub fn fit_dimensions(width: usize, height: usize, max_size: usize) -> Result<(usize, usize)> {
    if width == 0 || height == 0 {
        return Err(RestorationError::EmptyInput(width, height));
    }
    if max_size == 0 {
        return Err(RestorationError::InvalidConfiguration(
            "preview size must be positive".to_string(),
        ));
    }

    let fitted = if height > width {
        let scaled = (width as f64 * (max_size as f64 / height as f64)) as usize;
        (scaled.max(1), max_size)
    } else {
        let scaled = (height as f64 * (max_size as f64 / width as f64)) as usize;
        (max_size, scaled.max(1))
    };
    Ok(fitted)
}

/// Bilinear resample so the longer side becomes `max_size`.
pub fn resize_to_fit(image: &Raster, max_size: usize) -> Result<Raster> {
    let (width, height) = image.dimensions();
    let (target_width, target_height) = fit_dimensions(width, height, max_size)?;
    debug!(
        "Resizing preview {}x{} -> {}x{}",
        width, height, target_width, target_height
    );

    if (target_width, target_height) == (width, height) {
        return Ok(image.clone());
    }

    let sx = width as f64 / target_width as f64;
    let sy = height as f64 / target_height as f64;

    Raster::from_fn(target_width, target_height, |ox, oy| {
        // Map the output pixel center back into source coordinates.
        let src_x = ((ox as f64 + 0.5) * sx - 0.5).clamp(0.0, (width - 1) as f64);
        let src_y = ((oy as f64 + 0.5) * sy - 0.5).clamp(0.0, (height - 1) as f64);
        bilinear_sample(image, src_x, src_y)
    })
}

#[inline]
fn bilinear_sample(image: &Raster, x: f64, y: f64) -> u8 {
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(image.width() - 1);
    let y1 = (y0 + 1).min(image.height() - 1);
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = image.get(x0, y0) as f64;
    let p10 = image.get(x1, y0) as f64;
    let p01 = image.get(x0, y1) as f64;
    let p11 = image.get(x1, y1) as f64;

    let top = p00 * (1.0 - fx) + p10 * fx;
    let bottom = p01 * (1.0 - fx) + p11 * fx;
    (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8
}

/// Places `left` and `right` next to each other, `gap` black columns apart,
/// top-aligned. The shorter image is padded with black.
pub fn side_by_side(left: &Raster, right: &Raster, gap: usize) -> Result<Raster> {
    let width = left.width() + gap + right.width();
    let height = left.height().max(right.height());
    let right_start = left.width() + gap;

    Raster::from_fn(width, height, |x, y| {
        if x < left.width() {
            if y < left.height() { left.get(x, y) } else { 0 }
        } else if x >= right_start && y < right.height() {
            right.get(x - right_start, y)
        } else {
            0
        }
    })
}
