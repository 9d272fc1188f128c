//! Primitive raster filters
//!
//! Every filter reads its input raster and returns a freshly allocated one of
//! the same shape. Neighborhoods that run off the edge reuse the nearest edge
//! sample.

mod border;
mod box_filter;
mod median;
mod convolve;
mod blend;

pub use box_filter::box_blur;
pub use median::median_blur;
pub use convolve::{convolve, Kernel, PSF_SIZE};
pub use blend::weighted_sum;

pub(crate) use median::median_of;
