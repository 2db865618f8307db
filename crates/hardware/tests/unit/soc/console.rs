//! Console Sink Unit Tests.

use std::io::{self, Write};

use ls8_core::common::CpuError;
use ls8_core::soc::{BufferSink, OutputSink, WriterSink};

/// A writer whose every write fails.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn buffer_sink_keeps_order() {
    let mut sink = BufferSink::new();
    for v in [3, 0, 255] {
        sink.print(v).unwrap();
    }
    assert_eq!(sink.values, vec![3, 0, 255]);
}

#[test]
fn writer_sink_formats_decimal_per_line() {
    let mut sink = WriterSink::new(Vec::new());
    sink.print(0).unwrap();
    sink.print(72).unwrap();
    sink.print(255).unwrap();
    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "0\n72\n255\n");
}

#[test]
fn writer_sink_maps_io_failure() {
    let mut sink = WriterSink::new(BrokenPipe);
    match sink.print(1) {
        Err(CpuError::Output(msg)) => assert!(msg.contains("pipe closed")),
        other => panic!("expected Output error, got {other:?}"),
    }
}

fn emit_all<S: OutputSink>(mut sink: S, values: &[u8]) {
    for &v in values {
        sink.print(v).unwrap();
    }
}

#[test]
fn mutable_reference_is_a_sink() {
    let mut buffer = BufferSink::new();
    emit_all(&mut buffer, &[9, 10]);
    emit_all(&mut buffer, &[11]);
    assert_eq!(buffer.values, vec![9, 10, 11]);
}
