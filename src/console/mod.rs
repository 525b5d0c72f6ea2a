//! # Console Sink Module
//!
//! The console sink is the dispatcher's textual output channel: help text,
//! command output, and the malformed-input diagnostics all go through it.
//!
//! ## Overview
//!
//! The sink is an injected capability rather than a process-wide writer, so
//! the same dispatcher runs against a serial console in production and an
//! in-memory transcript in tests:
//!
//! - [`WriterSink`] - wraps any `io::Write`, flushing per line (interactive
//!   consoles must not batch output)
//! - [`CaptureSink`] - records every line for exact-text assertions
//!
//! Sink failures never escape the dispatch loop; the dispatcher logs them
//! and keeps serving lines.

mod core;

#[cfg(test)]
mod tests;

pub use self::core::{CaptureSink, ConsoleSink, WriterSink};
