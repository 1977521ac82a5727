//! 2D toolpath geometry: points, distances, and interpolation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Represents a 2D point on the cutting plane with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Linear interpolation towards `other`.
    ///
    /// `t = 0` yields `self` exactly and `t = 1` yields `other` exactly.
    /// `t` is not clamped; callers that need a point inside the segment
    /// must clamp it themselves.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Extracts the first `X<number> Y<number>` coordinate pair from a command.
///
/// Returns `None` for text without a coordinate pair (comments, bare feed
/// or spindle words) and for coordinate text that does not parse as a
/// number.
pub fn extract_point(command: &str) -> Option<Point> {
    static COORD_PAIR: OnceLock<Regex> = OnceLock::new();
    let regex = COORD_PAIR
        .get_or_init(|| Regex::new(r"X([\d.\-]+)\s+Y([\d.\-]+)").expect("invalid regex pattern"));

    let caps = regex.captures(command.trim())?;
    let x = caps[1].parse().ok()?;
    let y = caps[2].parse().ok()?;
    Some(Point::new(x, y))
}

/// Serializes a linear cutting move to the given point.
///
/// Coordinates are written with two decimal places, the precision every
/// synthesized move in the output carries.
pub fn linear_move(point: &Point) -> String {
    format!("G1 X{:.2} Y{:.2}", point.x, point.y)
}
