use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::validation::validate_odd_size;
use crate::image_pipeline::filters::median_of;
use crate::image_pipeline::raster::Raster;

/// Sliding-window median over the interior of `image`.
///
/// Samples closer than `window_size / 2` to any edge are not filtered and
/// come out as 0, leaving a black border band of that width.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn denoise(image: &Raster, window_size: usize) -> Result<Raster> {
    validate_odd_size("denoise window size", window_size)?;
    image.ensure_window(window_size)?;

    let (width, height) = image.dimensions();
    let offset = window_size / 2;

    debug!("Denoising interior rows {}..{}", offset, height - offset);

    let mut output = Raster::zeroed_like(image);
    output
        .par_rows_mut()
        .enumerate()
        .skip(offset)
        .take(height - 2 * offset)
        .for_each(|(i, out_row)| {
            let mut window = Vec::with_capacity(window_size * window_size);
            for j in offset..width - offset {
                window.clear();
                for row in i - offset..=i + offset {
                    window.extend_from_slice(&image.row(row)[j - offset..=j + offset]);
                }
                out_row[j] = median_of(&mut window);
            }
        });

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::common::error::RestorationError;

    fn in_border(x: usize, y: usize, width: usize, height: usize, band: usize) -> bool {
        x < band || y < band || x >= width - band || y >= height - band
    }

    #[test]
    fn test_center_spike_scenario() {
        let mut image = Raster::filled(9, 9, 100).unwrap();
        image.set(4, 4, 255);

        let out = denoise(&image, 3).unwrap();

        assert_eq!(out.get(4, 4), 100);
        for y in 0..9 {
            for x in 0..9 {
                let expected = if in_border(x, y, 9, 9, 1) { 0 } else { 100 };
                assert_eq!(out.get(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_border_band_zero_for_window_five() {
        let image = Raster::from_fn(12, 10, |x, y| (50 + x * 7 + y * 3) as u8).unwrap();
        let out = denoise(&image, 5).unwrap();
        assert_eq!(out.dimensions(), image.dimensions());
        for y in 0..10 {
            for x in 0..12 {
                if in_border(x, y, 12, 10, 2) {
                    assert_eq!(out.get(x, y), 0, "pixel ({x}, {y})");
                } else {
                    assert_ne!(out.get(x, y), 0, "pixel ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_matches_direct_definition() {
        let image = Raster::from_fn(11, 8, |x, y| ((x * 97 + y * 61) % 251) as u8).unwrap();
        let out = denoise(&image, 3).unwrap();
        for i in 1..7 {
            for j in 1..10 {
                let mut window: Vec<u8> = (i - 1..=i + 1)
                    .flat_map(|r| (j - 1..=j + 1).map(move |c| (c, r)))
                    .map(|(c, r)| image.get(c, r))
                    .collect();
                window.sort_unstable();
                assert_eq!(out.get(j, i), window[4]);
            }
        }
    }

    #[test]
    fn test_window_one_copies_everything() {
        let image = Raster::from_fn(4, 4, |x, y| (x + y * 4) as u8).unwrap();
        assert_eq!(denoise(&image, 1).unwrap(), image);
    }

    #[test]
    fn test_window_equal_to_raster_fills_single_center() {
        let image = Raster::from_fn(3, 3, |x, y| (x + y * 3) as u8 * 10).unwrap();
        let out = denoise(&image, 3).unwrap();
        assert_eq!(out.as_slice(), &[0, 0, 0, 0, 40, 0, 0, 0, 0]);
    }

    #[test]
    fn test_rejects_invalid_windows() {
        let image = Raster::filled(5, 5, 1).unwrap();
        assert!(matches!(
            denoise(&image, 4),
            Err(RestorationError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            denoise(&image, 7),
            Err(RestorationError::DimensionMismatch(_))
        ));
    }
}
