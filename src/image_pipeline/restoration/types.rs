//! Restoration configuration types

use crate::image_pipeline::common::error::{RestorationError, Result};
use crate::image_pipeline::common::validation::{validate_odd_size, validate_strength};

/// Parameters for one pipeline run. Every value is supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RestorationConfig {
    /// Side of the mean (box) kernel used by noise reduction and its recursive passes
    pub mean_kernel: usize,
    /// Side of the median kernel applied to the mean-blurred image
    pub median_kernel: usize,
    /// How many extra mean passes follow the mean/median blend
    pub recursive_iterations: usize,
    /// Side of the neighborhood-median window; half of it is the black border band
    pub denoise_window: usize,
    /// Weight of the blurred copy subtracted when sharpening
    pub sharpening_strength: f32,
}

impl RestorationConfig {
    pub fn new(
        mean_kernel: usize,
        median_kernel: usize,
        recursive_iterations: usize,
        denoise_window: usize,
        sharpening_strength: f32,
    ) -> Result<Self> {
        let config = Self {
            mean_kernel,
            median_kernel,
            recursive_iterations,
            denoise_window,
            sharpening_strength,
        };
        config.validate()?;
        Ok(config)
    }

    /// The parameter set the desktop tool shipped with.
    pub fn reference() -> Self {
        Self {
            mean_kernel: 1,
            median_kernel: 1,
            recursive_iterations: 10,
            denoise_window: 5,
            sharpening_strength: 0.5,
        }
    }

    pub fn builder() -> RestorationConfigBuilder {
        RestorationConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        validate_odd_size("mean kernel size", self.mean_kernel)?;
        validate_odd_size("median kernel size", self.median_kernel)?;
        validate_odd_size("denoise window size", self.denoise_window)?;
        validate_strength(self.sharpening_strength)
    }
}

/// Builder for RestorationConfig. Unlike most builders there are no
/// fallbacks: `build` fails if any value was left unset.
#[derive(Default)]
pub struct RestorationConfigBuilder {
    mean_kernel: Option<usize>,
    median_kernel: Option<usize>,
    recursive_iterations: Option<usize>,
    denoise_window: Option<usize>,
    sharpening_strength: Option<f32>,
}

impl RestorationConfigBuilder {
    pub fn mean_kernel(mut self, size: usize) -> Self {
        self.mean_kernel = Some(size);
        self
    }

    pub fn median_kernel(mut self, size: usize) -> Self {
        self.median_kernel = Some(size);
        self
    }

    pub fn recursive_iterations(mut self, iterations: usize) -> Self {
        self.recursive_iterations = Some(iterations);
        self
    }

    pub fn denoise_window(mut self, size: usize) -> Self {
        self.denoise_window = Some(size);
        self
    }

    pub fn sharpening_strength(mut self, strength: f32) -> Self {
        self.sharpening_strength = Some(strength);
        self
    }

    pub fn build(self) -> Result<RestorationConfig> {
        RestorationConfig::new(
            required(self.mean_kernel, "mean kernel size")?,
            required(self.median_kernel, "median kernel size")?,
            required(self.recursive_iterations, "recursive iteration count")?,
            required(self.denoise_window, "denoise window size")?,
            required(self.sharpening_strength, "sharpening strength")?,
        )
    }
}

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| RestorationError::InvalidConfiguration(format!("{name} was not set")))
}
