//! Pipeline conversions module
//!
//! Orchestration that wraps the in-memory restoration pipeline with decoding
//! and encoding.

mod file_restore;


pub use file_restore::{FileRestorePipeline, RestoreReport};
