//! Restoration orchestration module
//!
//! Configuration, the three-stage pipeline and its per-stage timings.

mod types;
mod pipeline;
mod timing;


pub use types::{RestorationConfig, RestorationConfigBuilder};
pub use pipeline::RestorationPipeline;
pub use timing::{StageTimings, StageTiming, Timer};
