use crate::image_pipeline::common::error::{RestorationError, Result};
use crate::image_pipeline::raster::Raster;

/// Per-sample `alpha * a + beta * b`, rounded half to even and clamped to `[0, 255]`.
pub fn weighted_sum(a: &Raster, alpha: f64, b: &Raster, beta: f64) -> Result<Raster> {
    if !a.same_shape(b) {
        return Err(RestorationError::DimensionMismatch(format!(
            "cannot blend {}x{} with {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        )));
    }

    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&pa, &pb)| {
            (alpha * pa as f64 + beta * pb as f64).round_ties_even().clamp(0.0, 255.0) as u8
        })
        .collect();

    Raster::new(a.width(), a.height(), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_blend_ties_round_to_even() {
        let a = Raster::new(5, 1, vec![10, 0, 102, 2, 255]).unwrap();
        let b = Raster::new(5, 1, vec![21, 1, 103, 3, 255]).unwrap();
        let blended = weighted_sum(&a, 0.5, &b, 0.5).unwrap();
        // 15.5 -> 16, 0.5 -> 0, 102.5 -> 102, 2.5 -> 2
        assert_eq!(blended.as_slice(), &[16, 0, 102, 2, 255]);
    }

    #[test]
    fn test_non_tie_rounds_to_nearest() {
        let a = Raster::new(2, 1, vec![10, 10]).unwrap();
        let b = Raster::new(2, 1, vec![0, 0]).unwrap();
        let out = weighted_sum(&a, 0.26, &b, 0.0).unwrap();
        assert_eq!(out.as_slice(), &[3, 3]);
        let out = weighted_sum(&a, 0.24, &b, 0.0).unwrap();
        assert_eq!(out.as_slice(), &[2, 2]);
    }

    #[test]
    fn test_clamps_both_ends() {
        let a = Raster::new(2, 1, vec![200, 10]).unwrap();
        let b = Raster::new(2, 1, vec![0, 200]).unwrap();
        let out = weighted_sum(&a, 3.0, &b, -2.0).unwrap();
        assert_eq!(out.as_slice(), &[255, 0]);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Raster::filled(2, 2, 0).unwrap();
        let b = Raster::filled(4, 1, 0).unwrap();
        assert!(matches!(
            weighted_sum(&a, 0.5, &b, 0.5),
            Err(RestorationError::DimensionMismatch(_))
        ));
    }
}
