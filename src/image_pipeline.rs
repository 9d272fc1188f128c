//! Grayscale image restoration pipeline
//!
//! The core is three pure stages run in sequence on an 8-bit [`Raster`]:
//! noise reduction, neighborhood denoising and deblur/sharpening. Around it
//! sit the collaborators that decode and encode TIFF files and build
//! display previews.

pub mod common;
pub mod raster;
pub mod filters;
pub mod stages;
pub mod restoration;
pub mod codec;
pub mod conversions;
pub mod preview;

pub use common::{
    RestorationError,
    Result,
};

pub use raster::Raster;

pub use filters::{
    Kernel,
    PSF_SIZE,
};

pub use stages::{
    reduce_noise,
    denoise,
    sharpen,
};

pub use restoration::{
    RestorationConfig,
    RestorationConfigBuilder,
    RestorationPipeline,
    StageTimings,
    StageTiming,
};

pub use codec::{
    RasterReader,
    RasterWriter,
    TiffCompression,
    TiffRasterReader,
    TiffRasterWriter,
};

pub use conversions::{
    FileRestorePipeline,
    RestoreReport,
};
