//! Shape boundary recognition over a streamed text buffer.
//!
//! A shape runs from a rapid traversal (`G0` with coordinate data) through
//! a cutting block introduced by `G1 ... F<pace>` to the `M5 S0` stop
//! marker. The extractor scans the accumulated buffer token by token and
//! remembers where the next candidate can begin, so text that was already
//! rejected is not rescanned when the next chunk arrives.

use rampcut_core::{extract_point, Point};
use tracing::{debug, trace};

/// One complete cut shape recognized in the input stream.
///
/// The surrounding text spans are kept byte for byte; only `commands` is
/// subject to rewriting.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Text before the traversal block, passed through untouched.
    pub preamble: String,
    /// The rapid traversal block that positions the head at the cut start.
    pub traversal: String,
    /// Text between the traversal block and the first cutting move.
    pub preparatory: String,
    /// Start point of the cut, extracted from the traversal block.
    pub start: Option<Point>,
    /// Target feed rate from the F word that ends the first cutting move.
    pub target_pace: f64,
    /// The cutting commands: the combined first cut line followed by the
    /// remaining lines, with empty lines discarded.
    pub commands: Vec<String>,
    /// The stop marker span, interior whitespace included.
    pub stop: String,
}

/// Streaming shape extractor over an internally accumulated buffer.
#[derive(Debug, Default)]
pub struct ShapeExtractor {
    buffer: String,
    /// Byte offset before which no traversal token can begin a match.
    scan_from: usize,
}

impl ShapeExtractor {
    /// Creates an extractor with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk of input text to the buffer.
    pub fn push_chunk(&mut self, chunk: &str) {
        self.buffer.push_str(chunk);
    }

    /// The unconsumed buffer contents.
    ///
    /// At end of input this is the trailing text to emit verbatim.
    pub fn remainder(&self) -> &str {
        &self.buffer
    }

    /// Attempts to extract the next complete shape from the buffer.
    ///
    /// Returns `None` when the boundary grammar cannot be completed with
    /// the input seen so far; the caller pushes more input and retries, or
    /// flushes [`Self::remainder`] at end of input. Matched text, the
    /// preamble included, is consumed from the buffer.
    pub fn take_shape(&mut self) -> Option<Shape> {
        match self.scan() {
            Ok((shape, consumed)) => {
                self.buffer.drain(..consumed);
                self.scan_from = 0;
                Some(shape)
            }
            Err(resume_at) => {
                self.scan_from = resume_at;
                None
            }
        }
    }

    /// Runs the boundary grammar over the buffer.
    ///
    /// `Ok` carries the shape and the number of bytes consumed; `Err`
    /// carries the offset at which the next scan should resume.
    fn scan(&self) -> std::result::Result<(Shape, usize), usize> {
        let buffer = &self.buffer;
        let bytes = buffer.as_bytes();

        // Traversal block: the first G0 with at least one coordinate byte.
        // Everything before it is preamble, and a match that starts at a
        // later G0 would also have matched here, so this candidate is the
        // only one that needs completing.
        let mut search = self.scan_from;
        let (g0, traversal_end) = loop {
            let Some(g0) = find(buffer, "G0", search) else {
                return Err(tail_resume(buffer));
            };
            let traversal_end = coord_run_end(bytes, g0 + 2);
            if traversal_end > g0 + 2 {
                break (g0, traversal_end);
            }
            if traversal_end >= bytes.len() {
                // Token at the buffer edge; coordinates may still arrive.
                return Err(g0);
            }
            search = g0 + 2;
        };

        // Cut start: the first G1 whose coordinate run is followed
        // directly by an F word. A G1 carrying some other trailing word
        // is an ordinary cutting command, not the block opener.
        let mut search = traversal_end;
        let (g1, cut_end, feed_end) = loop {
            let Some(g1) = find(buffer, "G1", search) else {
                return Err(g0);
            };
            let cut_end = coord_run_end(bytes, g1 + 2);
            if cut_end >= bytes.len() {
                return Err(g0);
            }
            if cut_end > g1 + 2 && bytes[cut_end] == b'F' {
                let feed_end = digit_run_end(bytes, cut_end + 1);
                if feed_end > cut_end + 1 {
                    break (g1, cut_end, feed_end);
                }
            }
            search = g1 + 2;
        };

        // Stop marker: M5, whitespace, S0.
        let mut search = feed_end;
        let (stop_start, stop_end) = loop {
            let Some(m5) = find(buffer, "M5", search) else {
                return Err(g0);
            };
            let ws_end = whitespace_run_end(bytes, m5 + 2);
            if ws_end + 2 > bytes.len() {
                return Err(g0);
            }
            if ws_end > m5 + 2 && &bytes[ws_end..ws_end + 2] == b"S0" {
                break (m5, ws_end + 2);
            }
            search = m5 + 2;
        };

        let traversal = &buffer[g0..traversal_end];
        let first_cut = buffer[g1..cut_end].trim();
        let mut commands = vec![first_cut.to_string()];
        commands.extend(
            buffer[feed_end..stop_start]
                .trim()
                .split(['\n', '\r'])
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
        let target_pace: f64 = buffer[cut_end + 1..feed_end].parse().unwrap_or(0.0);

        let shape = Shape {
            preamble: buffer[..g0].to_string(),
            traversal: traversal.to_string(),
            preparatory: buffer[traversal_end..g1].to_string(),
            start: extract_point(traversal),
            target_pace,
            commands,
            stop: buffer[stop_start..stop_end].to_string(),
        };
        debug!(
            target_pace = shape.target_pace,
            commands = shape.commands.len(),
            "matched shape boundary"
        );
        Ok((shape, stop_end))
    }
}

/// Finds `token` in `buffer` at or after `from`.
fn find(buffer: &str, token: &str, from: usize) -> Option<usize> {
    buffer.get(from..)?.find(token).map(|pos| pos + from)
}

/// Coordinate data: axis letters, signed decimal digits, and whitespace.
fn is_coord_byte(byte: u8) -> bool {
    matches!(byte, b'X' | b'Y' | b'-' | b'.') || byte.is_ascii_digit() || byte.is_ascii_whitespace()
}

fn coord_run_end(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_coord_byte(bytes[pos]) {
        pos += 1;
    }
    pos
}

fn digit_run_end(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

fn whitespace_run_end(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Resume offset when no traversal candidate exists in the buffer: keep one
/// byte of lookback so a token split across a chunk boundary is still seen.
fn tail_resume(buffer: &str) -> usize {
    let mut pos = buffer.len().saturating_sub(1);
    while pos > 0 && !buffer.is_char_boundary(pos) {
        pos -= 1;
    }
    trace!(resume_at = pos, "no traversal candidate in buffer");
    pos
}
