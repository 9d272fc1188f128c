use crate::image_pipeline::common::error::{RestorationError, Result};

/// Kernel and window sizes must be positive and odd so the window has a center sample.
pub fn validate_odd_size(name: &str, size: usize) -> Result<()> {
    if size == 0 || size % 2 == 0 {
        return Err(RestorationError::InvalidConfiguration(format!(
            "{name} must be a positive odd integer, got {size}"
        )));
    }
    Ok(())
}

pub fn validate_strength(strength: f32) -> Result<()> {
    if !strength.is_finite() {
        return Err(RestorationError::InvalidConfiguration(format!(
            "sharpening strength must be finite, got {strength}"
        )));
    }
    Ok(())
}
