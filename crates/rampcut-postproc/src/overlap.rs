//! Overlap extension for closed shapes.
//!
//! A closed cut tends to leave a ridge where the beam switched on and off;
//! re-cutting a short prefix of the path smooths it out. The extender walks
//! the path until the configured overlap distance is covered and splits the
//! crossing segment at the threshold.

use rampcut_core::{extract_point, linear_move, RampSettings};
use tracing::debug;

/// Computes the re-cut command block appended to a closed shape.
pub struct OverlapExtender<'a> {
    settings: &'a RampSettings,
}

impl<'a> OverlapExtender<'a> {
    pub fn new(settings: &'a RampSettings) -> Self {
        Self { settings }
    }

    /// Builds the overlap command list for a closed shape's command list.
    ///
    /// The first command is always re-emitted. Subsequent commands are
    /// included while the walked distance stays below the overlap
    /// distance; the segment that crosses the threshold is split there,
    /// provided the list has more than two commands and the segment has
    /// nonzero length. If the walk runs out of path first, the split
    /// ratio clamps to 1 and the final point is duplicated. The returned
    /// list is prefixed with a comment recording how many commands follow.
    pub fn extend(&self, commands: &[String]) -> Vec<String> {
        let Some(first) = commands.first() else {
            return Vec::new();
        };

        let mut overlap = vec![first.clone()];
        let mut walked = 0.0;
        let mut segment = 0.0;

        if let Some(mut prev) = extract_point(first) {
            let mut curr = prev;
            let mut index = 1;
            while index < commands.len() {
                let Some(point) = extract_point(&commands[index]) else {
                    // No coordinates to measure; carry the line along.
                    overlap.push(commands[index].clone());
                    index += 1;
                    continue;
                };
                curr = point;
                segment = prev.distance_to(&curr);
                walked += segment;
                if walked >= self.settings.overlap_distance {
                    break;
                }
                overlap.push(commands[index].clone());
                prev = curr;
                index += 1;
            }

            if commands.len() > 2 && segment > 0.0 {
                let fracture =
                    (1.0 - (walked - self.settings.overlap_distance) / segment).min(1.0);
                let split = prev.lerp(&curr, fracture);
                overlap.push(format!(
                    "{} ; Interpolated as {:.2} of last line ({} x {} --> {} x {})",
                    linear_move(&split),
                    fracture,
                    prev.x,
                    prev.y,
                    curr.x,
                    curr.y
                ));
            }
        }

        debug!(commands = overlap.len(), walked, "overlap block assembled");

        let added = overlap.len();
        overlap.insert(0, format!(" ; Added {} commands", added));
        overlap
    }
}
