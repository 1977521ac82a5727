//! Run configuration for the post-processor.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters controlling pace ramping and overlap extension.
///
/// Distances are in machine length units (typically millimeters), paces in
/// feed-rate units (typically mm/min). The values are fixed for a whole run
/// and passed by reference into every component; there is no process-wide
/// state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RampSettings {
    /// Length of the re-cut appended to a closed shape.
    pub overlap_distance: f64,
    /// Feed rate assigned at the start of every shape.
    pub start_pace: f64,
    /// Feed rate added at each ramp step.
    pub pace_increment: f64,
    /// Cutting distance between ramp steps.
    pub pace_distance: f64,
    /// Maximum distance between a shape's start and end point for the
    /// shape to count as closed.
    ///
    /// The historical behavior is an exact coordinate match, i.e. a
    /// tolerance of zero.
    pub closure_tolerance: f64,
}

impl Default for RampSettings {
    fn default() -> Self {
        Self {
            overlap_distance: 5.0,
            start_pace: 300.0,
            pace_increment: 100.0,
            pace_distance: 1.0,
            closure_tolerance: 0.0,
        }
    }
}

impl RampSettings {
    /// Validates that every parameter is usable for a run.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("overlap_distance", self.overlap_distance),
            ("start_pace", self.start_pace),
            ("pace_increment", self.pace_increment),
            ("pace_distance", self.pace_distance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParameter {
                    name,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }
        if !self.closure_tolerance.is_finite() || self.closure_tolerance < 0.0 {
            return Err(Error::InvalidParameter {
                name: "closure_tolerance",
                reason: format!("must be zero or positive, got {}", self.closure_tolerance),
            });
        }
        Ok(())
    }
}
