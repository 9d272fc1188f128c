use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::Result,
    filters::PSF_SIZE,
    raster::Raster,
    restoration::{RestorationConfig, StageTimings, Timer},
    stages::{denoise, reduce_noise, sharpen},
};

/// Runs noise reduction, denoising and sharpening in that order.
pub struct RestorationPipeline {
    config: RestorationConfig,
}

impl RestorationPipeline {
    pub fn new(config: RestorationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Fails with `DimensionMismatch` if any configured window, or the PSF,
    /// is larger than `image`.
    pub fn check_fits(&self, image: &Raster) -> Result<()> {
        let config = &self.config;
        for window in [
            config.mean_kernel,
            config.median_kernel,
            config.denoise_window,
            PSF_SIZE,
        ] {
            image.ensure_window(window)?;
        }
        Ok(())
    }

    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn run(&self, image: &Raster) -> Result<Raster> {
        self.run_with_timings(image).map(|(restored, _)| restored)
    }

    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn run_with_timings(&self, image: &Raster) -> Result<(Raster, StageTimings)> {
        self.check_fits(image)?;

        let config = &self.config;
        let mut timings = StageTimings::new();
        info!("Starting restoration");

        let timer = Timer::start("reduce_noise");
        let smoothed = {
            let _span = tracing::info_span!("reduce_noise",
                mean_kernel = config.mean_kernel,
                median_kernel = config.median_kernel,
                iterations = config.recursive_iterations
            ).entered();
            reduce_noise(
                image,
                config.mean_kernel,
                config.median_kernel,
                config.recursive_iterations,
            )?
        };
        timer.record(&mut timings);

        let timer = Timer::start("denoise");
        let denoised = {
            let _span = tracing::info_span!("denoise", window = config.denoise_window).entered();
            denoise(&smoothed, config.denoise_window)?
        };
        timer.record(&mut timings);

        let timer = Timer::start("sharpen");
        let sharpened = {
            let _span = tracing::info_span!("sharpen", strength = config.sharpening_strength).entered();
            sharpen(&denoised, config.sharpening_strength)?
        };
        timer.record(&mut timings);

        info!(
            width = sharpened.width(),
            height = sharpened.height(),
            "Restoration complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok((sharpened, timings))
    }

    pub fn config(&self) -> &RestorationConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RestorationConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }
}
