//! # Rampcut
//!
//! A laser G-code post-processor. Rampcut rewrites each detected cut shape
//! in a toolpath file so the feed rate ramps up gradually from a slow start
//! to the shape's target speed, and appends a short re-cut of the starting
//! segment to closed shapes so kerf and backlash do not leave a gap where
//! the cut begins and ends.
//!
//! ## Architecture
//!
//! Rampcut is organized as a workspace:
//!
//! 1. **rampcut-core** - geometry, run settings, error types
//! 2. **rampcut-postproc** - shape extraction, normalization, overlap
//!    extension, pace ramping, and the stream driver
//! 3. **rampcut** - the command-line binary that wires them together

pub mod cli;

pub use rampcut_core::{extract_point, linear_move, Point, RampSettings};
pub use rampcut_postproc::{
    dedup_consecutive, OverlapExtender, PaceRamper, PostProcessError, PostProcessor,
    ProcessSummary, Shape, ShapeExtractor,
};

/// Initializes tracing output for the binary.
///
/// `RUST_LOG` directives still apply; `verbose` only raises the default
/// level from INFO to DEBUG. Diagnostics go to stderr so they never mix
/// with the progress output on stdout.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(default_level.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))?;

    Ok(())
}
