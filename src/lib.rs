//! # brrtconsole
//!
//! **brrtconsole** is a line-oriented command console dispatcher for
//! constrained environments, powered by the `may` coroutine runtime.
//!
//! ## Overview
//!
//! brrtconsole consumes a continuous byte stream, splits it into discrete
//! lines, tokenizes each line into whitespace-delimited arguments, and
//! routes the argument vector to one of a set of registered command
//! handlers - the `command arg1 arg2 ...` convention of a serial debug
//! console or device shell. Malformed input (oversized lines, unknown
//! commands) is reported on the console and recovered in-loop; the
//! dispatcher never dies over bad input.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`source`]** - line sources: the `ReadOutcome` protocol, a channel
//!   pair for embedding behind any transport, and a fixed-capacity reader
//!   over `io::Read`
//! - **[`tokenizer`]** - zero-copy, stack-allocated line tokenization
//! - **[`dispatcher`]** - the command table, the built-in help command, and
//!   the coroutine dispatch loop with overflow recovery
//! - **[`console`]** - injected output sinks (writer-backed, capturing)
//! - **[`cli`]** - the demo binary's command-line interface
//! - **[`runtime_config`]** - environment-variable runtime tuning
//!
//! ### Line Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Transport as Byte Transport
//!     participant Source as LineSource
//!     participant Loop as CommandDispatcher<br/>(coroutine)
//!     participant Table as CommandTable
//!     participant Handler as CommandHandler
//!     participant Sink as ConsoleSink
//!
//!     Transport->>Source: bytes
//!     Loop->>Source: next_line() [suspends]
//!
//!     alt Buffer overflowed
//!         Source-->>Loop: Overflow(partial)
//!         Loop->>Sink: BufferOverflow: partial
//!         loop Until terminator
//!             Source-->>Loop: Overflow(fragment)
//!             Loop->>Sink: FlushToEOL: fragment
//!         end
//!         Source-->>Loop: Line(tail) [discarded]
//!     else Clean line
//!         Source-->>Loop: Line(text)
//!         Loop->>Loop: tokenize (≤ ARGV_SIZE views)
//!         alt help intercept
//!             Loop->>Sink: usage / banner
//!         else table lookup
//!             Loop->>Table: lookup(argv[0])
//!             alt Matched
//!                 Table-->>Loop: CommandEntry
//!                 Loop->>Handler: handle(argv, sink)
//!                 Handler->>Sink: command output
//!             else No match
//!                 Loop->>Sink: Unknown command: argv[0]
//!             end
//!         end
//!     end
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use brrtconsole::console::{ConsoleSink, WriterSink};
//! use brrtconsole::dispatcher::{CommandDispatcher, CommandTable};
//! use brrtconsole::source::ReaderLineSource;
//!
//! let mut table = CommandTable::new();
//! table.register(
//!     "status",
//!     "[verbose]",
//!     |_argv: &[&str], console: &mut dyn ConsoleSink| console.write_line("all good"),
//! );
//!
//! let source = ReaderLineSource::new(std::io::stdin());
//! let console = WriterSink::new(std::io::stdout());
//! let mut dispatcher = CommandDispatcher::new(source, console, table);
//! dispatcher.run();
//! ```
//!
//! ## Runtime Considerations
//!
//! brrtconsole uses the `may` coroutine runtime, not tokio or async-std:
//!
//! - The dispatch loop is one cooperative task whose only suspension point
//!   is awaiting the next line outcome
//! - Handlers run synchronously to completion and must not suspend
//! - Stack size is configurable via the `BRRTCON_STACK_SIZE` environment
//!   variable
//!
//! ## Demo
//!
//! ```bash
//! cargo run --bin brrtconsole-demo -- run
//! ```

pub mod cli;
pub mod console;
pub mod dispatcher;
mod echo;
pub mod runtime_config;
pub mod source;
pub mod tokenizer;

pub use console::{CaptureSink, ConsoleSink, WriterSink};
pub use dispatcher::{CommandDispatcher, CommandEntry, CommandHandler, CommandTable};
pub use source::{ChannelLineSource, LineFeeder, LineSource, ReadOutcome, ReaderLineSource};
pub use tokenizer::{tokenize, ArgVec, ARGV_SIZE, DELIMS};
