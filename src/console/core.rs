use std::io::{self, Write};

/// Textual output capability handed to the dispatcher and its command
/// handlers.
///
/// One call per console line; implementations append the line ending.
pub trait ConsoleSink: Send {
    /// Write one line of console output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// [`ConsoleSink`] over any `io::Write`.
///
/// Flushes after every line so prompts and diagnostics appear immediately on
/// interactive transports.
pub struct WriterSink<W> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        WriterSink { inner }
    }

    /// Unwrap, returning the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> ConsoleSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{line}")?;
        self.inner.flush()
    }
}

/// [`ConsoleSink`] that records the transcript in memory.
///
/// Used by the test suites to assert exact emitted text, and handy for
/// scripted/batch use of the dispatcher.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Vec<String>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain the transcript, leaving the sink empty.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl ConsoleSink for CaptureSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
