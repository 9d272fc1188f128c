//! The three restoration stages
//!
//! Each stage is a pure function of its input raster and parameters and
//! returns a new raster of the same shape.

mod noise_reduction;
mod denoise;
mod sharpen;

pub use noise_reduction::reduce_noise;
pub use denoise::denoise;
pub use sharpen::sharpen;
