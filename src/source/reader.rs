use std::io::{self, Read};

use tracing::{debug, warn};

use super::core::{LineSource, ReadOutcome};

/// Read chunk size. Small on purpose: sources in the target domain trickle
/// bytes in, and a large chunk buys nothing once the line buffer is capped.
const CHUNK_SIZE: usize = 256;

/// Default line buffer capacity in bytes.
pub const DEFAULT_MAX_LINE_LEN: usize = 120;

/// [`LineSource`] over a blocking byte reader with a fixed-capacity line
/// buffer.
///
/// Bytes accumulate until `\n` (a trailing `\r` is stripped, so CRLF input
/// works unmodified). When the buffer fills before a terminator shows up the
/// source yields [`ReadOutcome::Overflow`] with the truncated fragment and
/// keeps scanning, so one oversized physical line surfaces as one `Overflow`
/// per buffer-full followed by a final [`ReadOutcome::Line`] with the tail -
/// exactly the sequence the dispatcher's recovery state consumes.
///
/// EOF with buffered bytes flushes them as a final `Line`. Read errors close
/// the stream; per the console's error policy they are logged, not
/// propagated.
///
/// Input is byte text; anything that is not valid UTF-8 is decoded lossily
/// for the diagnostics channel.
pub struct ReaderLineSource<R> {
    reader: R,
    line: Vec<u8>,
    max_line_len: usize,
    chunk: [u8; CHUNK_SIZE],
    chunk_pos: usize,
    chunk_len: usize,
    eof: bool,
}

impl<R: Read> ReaderLineSource<R> {
    /// Wrap `reader` with the default line buffer capacity
    /// ([`DEFAULT_MAX_LINE_LEN`]).
    pub fn new(reader: R) -> Self {
        Self::with_max_line_len(reader, DEFAULT_MAX_LINE_LEN)
    }

    /// Wrap `reader` with an explicit line buffer capacity in bytes.
    /// A zero capacity is clamped to one byte.
    pub fn with_max_line_len(reader: R, max_line_len: usize) -> Self {
        let max_line_len = max_line_len.max(1);
        ReaderLineSource {
            reader,
            line: Vec::with_capacity(max_line_len),
            max_line_len,
            chunk: [0u8; CHUNK_SIZE],
            chunk_pos: 0,
            chunk_len: 0,
            eof: false,
        }
    }

    fn take_line(&mut self) -> String {
        let text = String::from_utf8_lossy(&self.line).into_owned();
        self.line.clear();
        text
    }

    fn fill_chunk(&mut self) -> bool {
        loop {
            match self.reader.read(&mut self.chunk) {
                Ok(0) => {
                    self.eof = true;
                    return false;
                }
                Ok(n) => {
                    self.chunk_pos = 0;
                    self.chunk_len = n;
                    return true;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "line source read failed, closing stream");
                    self.eof = true;
                    return false;
                }
            }
        }
    }
}

impl<R: Read> LineSource for ReaderLineSource<R> {
    fn next_line(&mut self) -> Option<ReadOutcome> {
        loop {
            while self.chunk_pos < self.chunk_len {
                let byte = self.chunk[self.chunk_pos];
                self.chunk_pos += 1;

                if byte == b'\n' {
                    if self.line.last() == Some(&b'\r') {
                        self.line.pop();
                    }
                    return Some(ReadOutcome::Line(self.take_line()));
                }

                self.line.push(byte);
                if self.line.len() == self.max_line_len {
                    return Some(ReadOutcome::Overflow(self.take_line()));
                }
            }

            if self.eof || !self.fill_chunk() {
                if !self.line.is_empty() {
                    debug!("eof with partial line, flushing");
                    return Some(ReadOutcome::Line(self.take_line()));
                }
                return None;
            }
        }
    }
}
