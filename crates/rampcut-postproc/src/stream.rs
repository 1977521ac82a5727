//! Chunked stream driver.
//!
//! Reads the input in arbitrary-size chunks, extracts one shape at a time,
//! rewrites its cutting block, and writes everything else through
//! byte-for-byte. Fully sequential; a stream failure ends the run.

use std::io::{Read, Write};

use serde::Serialize;
use tracing::{debug, info, warn};

use rampcut_core::{extract_point, Point, RampSettings};

use crate::error::Result;
use crate::extractor::{Shape, ShapeExtractor};
use crate::normalizer::dedup_consecutive;
use crate::overlap::OverlapExtender;
use crate::ramp::PaceRamper;

/// Marker written after the cut block of a shape that does not close.
const OPEN_SHAPE_MARKER: &str = "; overlap is skipped for non-closed shape";

/// Read chunk size in bytes.
const CHUNK_SIZE: usize = 8 * 1024;

/// Outcome of a post-processing run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ProcessSummary {
    /// Number of shapes recognized and rewritten.
    pub shapes_processed: usize,
}

/// Drives shape extraction and rewriting over a reader/writer pair.
pub struct PostProcessor<'a> {
    settings: &'a RampSettings,
}

impl<'a> PostProcessor<'a> {
    pub fn new(settings: &'a RampSettings) -> Self {
        Self { settings }
    }

    /// Processes `reader` into `writer`.
    pub fn process<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<ProcessSummary> {
        self.process_with_progress(reader, writer, |_| {})
    }

    /// Processes `reader` into `writer`, reporting each finished shape.
    ///
    /// `on_shape` receives the running shape count after every rewritten
    /// shape. Input that never matches a shape boundary is flushed
    /// verbatim at end of input.
    pub fn process_with_progress<R, W, F>(
        &self,
        mut reader: R,
        mut writer: W,
        mut on_shape: F,
    ) -> Result<ProcessSummary>
    where
        R: Read,
        W: Write,
        F: FnMut(usize),
    {
        let mut extractor = ShapeExtractor::new();
        let mut summary = ProcessSummary::default();
        let mut chunk = vec![0u8; CHUNK_SIZE];
        // Bytes of a UTF-8 sequence cut off at a chunk boundary.
        let mut stash: Vec<u8> = Vec::new();

        loop {
            let read = reader.read(&mut chunk)?;
            if read == 0 {
                break;
            }
            stash.extend_from_slice(&chunk[..read]);
            let valid_up_to = match std::str::from_utf8(&stash) {
                Ok(_) => stash.len(),
                Err(err) if err.error_len().is_none() => err.valid_up_to(),
                Err(err) => return Err(err.into()),
            };
            if valid_up_to > 0 {
                extractor.push_chunk(std::str::from_utf8(&stash[..valid_up_to])?);
                stash.drain(..valid_up_to);
            }

            while let Some(shape) = extractor.take_shape() {
                let rendered = self.render_shape(&shape);
                writer.write_all(rendered.as_bytes())?;
                summary.shapes_processed += 1;
                on_shape(summary.shapes_processed);
            }
        }

        if !stash.is_empty() {
            // The input ended in the middle of a multi-byte sequence.
            std::str::from_utf8(&stash).map(|tail| extractor.push_chunk(tail))?;
        }
        writer.write_all(extractor.remainder().as_bytes())?;
        writer.flush()?;

        info!(shapes = summary.shapes_processed, "post-processing finished");
        Ok(summary)
    }

    /// Rewrites one shape into its output text.
    fn render_shape(&self, shape: &Shape) -> String {
        let commands = dedup_consecutive(&shape.commands);

        let mut output = String::with_capacity(
            shape.preamble.len() + shape.traversal.len() + shape.preparatory.len() + 256,
        );
        output.push_str(&shape.preamble);
        output.push_str(&shape.traversal);
        output.push_str(&shape.preparatory);
        output.push('\n');

        let Some(start) = shape.start else {
            // No coordinate pair in the traversal block; nothing to ramp
            // from, so the cut block is left alone.
            warn!("traversal block has no coordinate pair; shape passed through");
            output.push_str(&commands.join("\n"));
            output.push('\n');
            output.push_str(&shape.stop);
            return output;
        };

        let ramper = PaceRamper::new(self.settings);
        if self.is_closed(&commands, &start) {
            let mut combined = commands;
            let overlap = OverlapExtender::new(self.settings).extend(&combined);
            combined.extend(overlap);
            let ramped = ramper.ramp(start, &combined, shape.target_pace);
            output.push_str(&ramped.join("\n"));
            output.push('\n');
        } else {
            debug!("shape does not close; skipping overlap");
            let ramped = ramper.ramp(start, &commands, shape.target_pace);
            output.push_str(&ramped.join("\n"));
            output.push_str(OPEN_SHAPE_MARKER);
            output.push('\n');
        }
        output.push_str(&shape.stop);
        output
    }

    /// A shape is closed when its last command returns to the start point.
    fn is_closed(&self, commands: &[String], start: &Point) -> bool {
        commands
            .last()
            .and_then(|command| extract_point(command))
            .is_some_and(|end| end.distance_to(start) <= self.settings.closure_tolerance)
    }
}
