//! # VoxSketch Core
//!
//! Shared error type and constants used by the designer, settings and the
//! command-line front end.

pub mod constants;
pub mod error;

pub use error::{Error, Result};
