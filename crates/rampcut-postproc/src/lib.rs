//! # Rampcut Post-Processing Engine
//!
//! This crate rewrites laser-cutter G-code so that every detected cut shape
//! starts slowly and accelerates to its target feed rate, and closed shapes
//! get a short re-cut of their starting segment to compensate for kerf and
//! backlash.
//!
//! ## Stages
//!
//! - **Extractor**: recognizes shape boundaries in a streamed text buffer
//! - **Normalizer**: collapses consecutive duplicate commands
//! - **Overlap Extender**: appends the start-of-path re-cut to closed shapes
//! - **Pace Ramper**: steps the feed rate up from the start pace, splitting
//!   segments at ramp boundaries
//! - **Stream Driver**: chunked reads, per-shape rewriting, verbatim
//!   pass-through of everything between shapes

pub mod error;
pub mod extractor;
pub mod normalizer;
pub mod overlap;
pub mod ramp;
pub mod stream;

pub use error::{PostProcessError, Result};
pub use extractor::{Shape, ShapeExtractor};
pub use normalizer::dedup_consecutive;
pub use overlap::OverlapExtender;
pub use ramp::PaceRamper;
pub use stream::{PostProcessor, ProcessSummary};
