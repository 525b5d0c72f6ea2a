//! # Dispatcher Module
//!
//! The dispatcher module provides the coroutine-based command dispatch loop:
//! it awaits lines from a [`LineSource`](crate::source::LineSource),
//! tokenizes them, and routes the argument vector to the matching entry of a
//! [`CommandTable`].
//!
//! ## Overview
//!
//! The dispatcher is the heart of the console. It:
//! - Holds the registry of command entries (name, handler, help text)
//! - Intercepts the built-in `help` command before table lookup
//! - Runs the line-read / error-recovery state machine
//! - Contains handler panics so one bad command cannot kill the console
//!
//! ## Architecture
//!
//! The loop runs as a single cooperative task on the `may` runtime:
//!
//! - The only suspension point is awaiting the next line outcome
//! - Tokenization, lookup, help formatting, and handler invocation run
//!   synchronously to completion once a line is available
//! - Handlers must not suspend; they are expected to be short-running
//! - Lines are processed strictly in arrival order
//!
//! ## Line Flow
//!
//! 1. Line source yields an outcome → clean line or overflow fragment
//! 2. Clean line → tokenize (≤ ARGV_SIZE argument views, zero-copy)
//! 3. `help` intercept, else linear table scan on `argv[0]`
//! 4. Matched entry's handler runs with the argument vector and the console
//!    sink; unknown names get a one-line diagnostic
//! 5. Overflow → diagnostic, then the recovery sub-state discards trailing
//!    fragments of the oversized line before resuming
//!
//! ## Error Handling
//!
//! Every malformed-input condition is recovered inside the loop and surfaced
//! only on the console sink:
//! - Oversized lines report `BufferOverflow: ...` then `FlushToEOL: ...` per
//!   discarded fragment
//! - Unmatched names report `Unknown command: ...`
//! - Excess tokens truncate silently by policy
//! - Handler panics are caught and logged; the loop resumes
//!
//! The dispatcher never terminates itself over input; it stops only when the
//! line source closes.

mod core;


pub use self::core::{CommandDispatcher, CommandEntry, CommandHandler, CommandTable, HELP_COMMAND};
