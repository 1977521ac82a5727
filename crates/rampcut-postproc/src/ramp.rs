//! Stepwise feed-rate ramp applied to a shape's cutting commands.
//!
//! Each shape starts cutting at a slow pace and accelerates to its target
//! feed rate in fixed increments, one step per configured sampling
//! distance. When a step boundary falls inside a segment, the segment is
//! split ("fractured") at the boundary and the rest of it is re-evaluated
//! from the split point.

use rampcut_core::{extract_point, linear_move, Point, RampSettings};
use tracing::trace;

/// What the ramp loop does with the command in front of the cursor.
enum Step {
    /// The command carries no coordinates; emit it untouched.
    PassThrough,
    /// The segment fits inside the current ramp window; consume it whole.
    Consume { point: Point, length: f64 },
    /// The ramp window ends inside the segment; split it and stay on it.
    Split { point: Point, fracture: f64 },
}

/// Rewrites a command list so the feed rate climbs from the configured
/// start pace to the shape's target pace.
pub struct PaceRamper<'a> {
    settings: &'a RampSettings,
}

impl<'a> PaceRamper<'a> {
    pub fn new(settings: &'a RampSettings) -> Self {
        Self { settings }
    }

    /// Decides between consuming the segment whole and splitting it.
    ///
    /// A zero-length segment never splits, so the fracture ratio is always
    /// finite and in [0, 1].
    fn plan(&self, position: &Point, ramp_distance: f64, command: &str) -> Step {
        let Some(point) = extract_point(command) else {
            return Step::PassThrough;
        };
        let length = position.distance_to(&point);
        if length > 0.0 && ramp_distance + length > self.settings.pace_distance {
            let fracture = (self.settings.pace_distance - ramp_distance) / length;
            Step::Split {
                point: position.lerp(&point, fracture),
                fracture,
            }
        } else {
            Step::Consume { point, length }
        }
    }

    /// Applies the ramp to `commands`, starting from the `start` point.
    ///
    /// While the pace is below `target_pace` every coordinate command is
    /// re-emitted with an explicit F word; once the target is reached (or
    /// the list ends) the remaining commands pass through verbatim,
    /// original feed text included.
    pub fn ramp(&self, start: Point, commands: &[String], target_pace: f64) -> Vec<String> {
        let mut pace = self.settings.start_pace;
        let mut position = start;
        let mut ramp_distance = 0.0;
        let mut cursor = 0;
        let mut rewritten = Vec::with_capacity(commands.len());

        while cursor < commands.len() && pace < target_pace {
            match self.plan(&position, ramp_distance, &commands[cursor]) {
                Step::PassThrough => {
                    rewritten.push(commands[cursor].clone());
                    cursor += 1;
                }
                Step::Consume { point, length } => {
                    ramp_distance += length;
                    rewritten.push(format!("{} F{:.0}", linear_move(&point), pace));
                    position = point;
                    cursor += 1;
                }
                Step::Split { point, fracture } => {
                    pace = (pace + self.settings.pace_increment).min(target_pace);
                    trace!(fracture, pace, "split segment at ramp boundary");
                    rewritten.push(format!(
                        "{} F{:.0} ; fractured by {:.4}",
                        linear_move(&point),
                        pace,
                        fracture
                    ));
                    position = point;
                    ramp_distance = 0.0;
                    // The cursor stays put: the rest of this segment is
                    // re-evaluated from the split point.
                }
            }
        }

        rewritten.extend(commands[cursor..].iter().cloned());
        rewritten
    }
}
