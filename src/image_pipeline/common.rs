//! Common utilities module
//!
//! Error type and the parameter checks shared by every stage.

pub mod error;
pub mod validation;

pub use error::{RestorationError, Result};
