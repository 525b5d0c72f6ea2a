//! # Line Source Module
//!
//! Line sources feed the dispatcher one [`ReadOutcome`] at a time.
//!
//! ## Overview
//!
//! The dispatcher never reads bytes itself. A [`LineSource`] owns the
//! line-accumulation buffer and the line-ending convention, and hands over
//! finished lines with the terminator already stripped. Each poll yields one
//! of three things:
//!
//! - suspend the calling coroutine (no line yet - blocking inside
//!   [`LineSource::next_line`])
//! - [`ReadOutcome::Line`] - a complete line
//! - [`ReadOutcome::Overflow`] - the buffer filled before a terminator was
//!   seen; the payload is the truncated fragment
//!
//! `next_line` returning `None` means the stream closed; the dispatch loop
//! then returns cleanly.
//!
//! ## Implementations
//!
//! - [`channel`] / [`ChannelLineSource`] / [`LineFeeder`] - an mpsc pair on
//!   the `may` runtime. Any producer coroutine can feed outcomes in; this is
//!   the seam for embedding the console behind an arbitrary transport and
//!   the harness the integration tests drive.
//! - [`ReaderLineSource`] - accumulates bytes from a blocking `io::Read`
//!   (stdin, a serial port device node) into a fixed-capacity buffer,
//!   reporting one `Overflow` per buffer-full and a final `Line` holding the
//!   tail of the oversized line.

mod core;
mod reader;


pub use self::core::{channel, ChannelLineSource, LineFeeder, LineSource, ReadOutcome};
pub use reader::{ReaderLineSource, DEFAULT_MAX_LINE_LEN};
