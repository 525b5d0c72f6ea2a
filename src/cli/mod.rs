//! # CLI Module
//!
//! The CLI module provides the command-line interface for the demo console
//! binary.
//!
//! ## Overview
//!
//! `brrtconsole-demo` wires the dispatcher to stdin/stdout with the sample
//! command set, which is the quickest way to poke at the console behavior:
//!
//! ```bash
//! brrtconsole-demo run
//! echo hello world
//! add 1 2 3
//! help
//! ```
//!
//! The process ends on EOF (Ctrl-D); lines longer than `--max-line-len`
//! exercise the overflow recovery path visibly.
//!
//! Structured logging honors `RUST_LOG`, e.g.
//! `RUST_LOG=brrtconsole=debug brrtconsole-demo run`.

mod commands;


pub use commands::{run_cli, sample_table, Cli, Commands};
