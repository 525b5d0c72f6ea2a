//! # Tokenizer Module
//!
//! The tokenizer module splits one input line into whitespace-delimited
//! argument views for dispatch.
//!
//! ## Overview
//!
//! Command lines have the form `command arg1 arg2 ...`. The tokenizer turns
//! one line into an argument vector the way the C `main()` convention does:
//! `argv[0]` is the command name and the remaining entries are its arguments.
//!
//! - Delimiters are the [`DELIMS`] constant (space and tab)
//! - Runs of delimiters collapse; no empty tokens are produced
//! - Leading and trailing delimiters are ignored
//! - At most [`ARGV_SIZE`] tokens are captured; the rest of the line is
//!   silently dropped (documented truncation policy, not an error)
//!
//! ## Zero-copy contract
//!
//! Tokens are `&str` subslices of the input line collected into a
//! stack-allocated [`ArgVec`]. Nothing is copied and nothing is heap
//! allocated for lines with up to [`ARGV_SIZE`] tokens. The views are only
//! valid while the line buffer for the current dispatch cycle is alive.

mod core;


pub use self::core::{tokenize, ArgVec, ARGV_SIZE, DELIMS};
