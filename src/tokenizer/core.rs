//! Tokenizer core module - hot path for line tokenization.
//!
//! # JSF Compliance (Rule 206)
//!
//! This module is part of the dispatch hot path. The following clippy lints
//! are denied to enforce "no heap allocations after initialization":
//!
//! - `clippy::inefficient_to_string` - Catches unnecessary allocations
//! - `clippy::format_push_string` - Prevents format! string building
//! - `clippy::unnecessary_to_owned` - Prevents .to_owned() on borrowed data

// JSF Rule 206: Deny heap allocations in the hot path
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use smallvec::SmallVec;

/// Maximum number of tokens captured from one line, command name included.
///
/// Console commands in the target domain carry a handful of flags; ten views
/// cover them without heap allocation. Tokens past the limit are dropped,
/// see [`tokenize`].
pub const ARGV_SIZE: usize = 10;

/// Token delimiter set. A token is a maximal run of non-delimiter bytes.
pub const DELIMS: &[char] = &[' ', '\t'];

/// Stack-allocated argument vector for the dispatch hot path.
///
/// Holds `&str` views into the current line buffer, so tokenizing allocates
/// nothing for lines with up to [`ARGV_SIZE`] tokens. The views die with the
/// dispatch cycle that produced them.
pub type ArgVec<'a> = SmallVec<[&'a str; ARGV_SIZE]>;

/// Tokenize `line` on [`DELIMS`], capturing at most `max_args` tokens.
///
/// Consecutive delimiters collapse and leading/trailing delimiters are
/// ignored, so an empty line or a line of only delimiters yields an empty
/// vector. Once `max_args` tokens have been captured the scan stops and the
/// remainder of the line is dropped without diagnostic - oversized argument
/// lists truncate by policy rather than fail.
#[must_use]
pub fn tokenize(line: &str, max_args: usize) -> ArgVec<'_> {
    let mut argv = ArgVec::new();
    for token in line.split(DELIMS) {
        if token.is_empty() {
            continue;
        }
        if argv.len() == max_args {
            break;
        }
        argv.push(token);
    }
    argv
}
