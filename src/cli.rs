//! Command-line interface for the rampcut binary.

use std::path::{Path, PathBuf};

use clap::Parser;

use rampcut_core::RampSettings;

/// Laser G-code post-processor: ramps the feed rate into every cut shape
/// and re-cuts the start of closed shapes to compensate for kerf and
/// backlash.
#[derive(Debug, Parser)]
#[command(name = "rampcut", version, about)]
pub struct Cli {
    /// Source G-code file.
    pub input: PathBuf,

    /// Output file; derived from the input name when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Overlap re-cut length for closed shapes, in machine units.
    #[arg(short, long, default_value_t = 5.0)]
    pub overlap: f64,

    /// Feed rate assigned at the start of every shape.
    #[arg(short = 'p', long, default_value_t = 300.0)]
    pub start_pace: f64,

    /// Feed rate added at each ramp step.
    #[arg(short = 'i', long, default_value_t = 100.0)]
    pub pace_increment: f64,

    /// Distance between ramp steps, in tenths of a machine unit.
    #[arg(short = 'd', long, default_value_t = 10.0)]
    pub pace_distance: f64,

    /// Maximum start/end distance for a shape to count as closed.
    ///
    /// Zero keeps the historical exact-coordinate comparison.
    #[arg(long, default_value_t = 0.0)]
    pub closure_tolerance: f64,

    /// Enable diagnostic tracing. Has no effect on the output file.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Settings for the run.
    ///
    /// The pace distance moves from tenths to machine units here, at the
    /// CLI boundary; the core only ever sees machine units.
    pub fn settings(&self) -> RampSettings {
        RampSettings {
            overlap_distance: self.overlap,
            start_pace: self.start_pace,
            pace_increment: self.pace_increment,
            pace_distance: self.pace_distance / 10.0,
            closure_tolerance: self.closure_tolerance,
        }
    }

    /// Output path: `--out` when given, otherwise the input name with the
    /// run parameters baked in, e.g. `part-ovr5-sp300-pd10-pi100.gcode`.
    ///
    /// The pace-distance component keeps the raw tenths value from the
    /// command line.
    pub fn output_path(&self) -> PathBuf {
        match &self.out {
            Some(out) => out.clone(),
            None => derive_output_path(
                &self.input,
                self.overlap,
                self.start_pace,
                self.pace_distance,
                self.pace_increment,
            ),
        }
    }
}

fn derive_output_path(
    input: &Path,
    overlap: f64,
    start_pace: f64,
    pace_distance: f64,
    pace_increment: f64,
) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    let name = format!("{stem}-ovr{overlap}-sp{start_pace}-pd{pace_distance}-pi{pace_increment}");
    match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => input.with_file_name(format!("{name}.{ext}")),
        None => input.with_file_name(name),
    }
}
