//! Unit tests for console sinks

use super::{CaptureSink, ConsoleSink, WriterSink};

#[test]
fn test_writer_sink_appends_newline() {
    let mut sink = WriterSink::new(Vec::new());
    sink.write_line("Usage: help [command]").unwrap();
    sink.write_line("ok").unwrap();
    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(out, "Usage: help [command]\nok\n");
}

#[test]
fn test_capture_sink_records_in_order() {
    let mut sink = CaptureSink::new();
    sink.write_line("first").unwrap();
    sink.write_line("second").unwrap();
    assert_eq!(sink.lines(), ["first", "second"]);

    let taken = sink.take_lines();
    assert_eq!(taken, ["first", "second"]);
    assert!(sink.lines().is_empty());
}
