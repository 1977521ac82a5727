//! # Rampcut Core
//!
//! Core types and utilities for the rampcut post-processor:
//! 2D toolpath geometry, coordinate extraction from G-code command text,
//! run settings, and error types.

pub mod error;
pub mod geometry;
pub mod settings;

pub use error::{Error, Result};
pub use geometry::{extract_point, linear_move, Point};
pub use settings::RampSettings;
