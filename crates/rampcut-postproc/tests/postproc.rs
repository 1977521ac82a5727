//! End-to-end tests for the post-processing engine.

use std::io::{Read, Write};

use rampcut_core::RampSettings;
use rampcut_postproc::PostProcessor;

/// Reader adapter that hands out at most `step` bytes per read call, to
/// exercise chunk-boundary handling.
struct Trickle<'a> {
    data: &'a [u8],
    pos: usize,
    step: usize,
}

impl<'a> Trickle<'a> {
    fn new(data: &'a [u8], step: usize) -> Self {
        Self { data, pos: 0, step }
    }
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let remaining = &self.data[self.pos..];
        let len = remaining.len().min(self.step).min(buf.len());
        buf[..len].copy_from_slice(&remaining[..len]);
        self.pos += len;
        Ok(len)
    }
}

fn settings() -> RampSettings {
    RampSettings {
        overlap_distance: 5.0,
        start_pace: 300.0,
        pace_increment: 100.0,
        pace_distance: 5.0,
        closure_tolerance: 0.0,
    }
}

fn process(input: &str, settings: &RampSettings) -> String {
    let mut output = Vec::new();
    PostProcessor::new(settings)
        .process(input.as_bytes(), &mut output)
        .expect("processing should succeed");
    String::from_utf8(output).expect("output is UTF-8")
}

const SQUARE: &str = "\
; 10x10 square
G0 X0 Y0
M3 S1000
G1 X10.00 Y0.00 F500
G1 X10.00 Y10.00
G1 X0.00 Y10.00
G1 X0.00 Y0.00
M5 S0
; done
";

#[test]
fn closed_square_is_ramped_and_overlapped() {
    let settings = settings();
    let output = process(SQUARE, &settings);

    // Pass-through spans survive byte for byte.
    assert!(output.starts_with("; 10x10 square\nG0 X0 Y0\nM3 S1000\n"));
    assert!(output.ends_with("M5 S0\n; done\n"));

    // The ramp starts slowly and steps up at the sampling distance.
    assert!(output.contains("G1 X5.00 Y0.00 F400 ; fractured by 0.5000"));
    assert!(output.contains("G1 X10.00 Y0.00 F500 ; fractured by 0.0000"));

    // The overlap block re-cuts the first edge and splits the second.
    assert!(output.contains("; Added 2 commands"));
    assert!(output.contains("G1 X10.00 Y5.00 ; Interpolated as 0.50"));
}

#[test]
fn open_path_skips_overlap() {
    let settings = settings();
    let input = "\
G0 X0 Y0
G1 X10.00 Y0.00 F500
G1 X20.00 Y0.00
M5 S0
";
    let output = process(input, &settings);

    assert!(output.contains("; overlap is skipped for non-closed shape"));
    assert!(!output.contains("Added"));
    // The command past the end of the ramp keeps its original text.
    assert!(output.contains("G1 X20.00 Y0.00"));
}

#[test]
fn output_does_not_depend_on_chunk_size() {
    let settings = settings();
    let input = format!("{}{}", SQUARE, SQUARE);

    let mut whole = Vec::new();
    PostProcessor::new(&settings)
        .process(input.as_bytes(), &mut whole)
        .expect("whole-input run");

    for step in [1, 2, 7, 64] {
        let mut trickled = Vec::new();
        PostProcessor::new(&settings)
            .process(Trickle::new(input.as_bytes(), step), &mut trickled)
            .expect("trickled run");
        assert_eq!(trickled, whole, "divergence at step {}", step);
    }
}

#[test]
fn multibyte_comment_survives_chunk_boundaries() {
    let settings = settings();
    let input = "; Überfahrt — prüfen\nno shapes here\n";

    let mut output = Vec::new();
    PostProcessor::new(&settings)
        .process(Trickle::new(input.as_bytes(), 1), &mut output)
        .expect("trickled run");
    assert_eq!(String::from_utf8(output).unwrap(), input);
}

#[test]
fn consecutive_duplicate_commands_are_dropped() {
    let settings = settings();
    let input = "\
G0 X0 Y0
G1 X10.00 Y0.00 F500
G1 X20.00 Y0.00
G1 X20.00 Y0.00
G1 X20.00 Y0.00
M5 S0
";
    let output = process(input, &settings);

    let occurrences = output.matches("G1 X20.00 Y0.00").count();
    assert_eq!(occurrences, 1);
}

#[test]
fn trailing_text_after_last_shape_is_verbatim() {
    let settings = settings();
    let trailer = "\nG0 X99 Y99\n; traversal with no cut behind it\n";
    let input = format!("{}{}", SQUARE, trailer);
    let output = process(&input, &settings);

    assert!(output.ends_with(trailer));
}

#[test]
fn file_round_trip_with_tempfile() {
    let settings = settings();
    let dir = tempfile::tempdir().expect("create temp dir");
    let in_path = dir.path().join("input.gcode");
    let out_path = dir.path().join("output.gcode");
    std::fs::write(&in_path, SQUARE).expect("write input");

    let reader = std::fs::File::open(&in_path).expect("open input");
    let writer = std::fs::File::create(&out_path).expect("create output");
    let summary = PostProcessor::new(&settings)
        .process(reader, writer)
        .expect("processing should succeed");

    assert_eq!(summary.shapes_processed, 1);
    let output = std::fs::read_to_string(&out_path).expect("read output");
    assert!(output.contains("; Added 2 commands"));
}

#[test]
fn writer_failure_is_fatal() {
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let settings = settings();
    let result = PostProcessor::new(&settings).process(SQUARE.as_bytes(), FailingWriter);
    assert!(result.is_err());
}
