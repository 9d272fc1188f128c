//! Single-channel 8-bit raster
//!
//! The one data type that flows through every stage of the pipeline.

mod types;

pub use types::Raster;
