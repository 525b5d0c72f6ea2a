//! Dispatcher core module - hot path for line dispatch.
//!
//! # JSF Compliance (Rule 206)
//!
//! This module is part of the line dispatch hot path. The following clippy
//! lints are denied to enforce "no heap allocations after initialization":
//!
//! - `clippy::inefficient_to_string` - Catches unnecessary allocations
//! - `clippy::format_push_string` - Prevents format! string building
//! - `clippy::unnecessary_to_owned` - Prevents .to_owned() on borrowed data
//!
//! The diagnostics and help paths do allocate; they are off the fast path.

// JSF Rule 206: Deny heap allocations in the hot path
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use std::io;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use may::coroutine;
use tracing::{debug, error, info, warn};

use crate::console::ConsoleSink;
use crate::runtime_config::RuntimeConfig;
use crate::source::{LineSource, ReadOutcome};
use crate::tokenizer::{tokenize, ARGV_SIZE};

/// Name of the built-in help command.
///
/// Intercepted before table lookup, so a registered entry with this name is
/// masked. That is documented policy, not a collision error; see
/// [`CommandTable::register_entry`].
pub const HELP_COMMAND: &str = "help";

const HELP_USAGE: &str = "Usage: help [command]";

/// A command handler invoked with the tokenized argument vector.
///
/// `argv[0]` is the command name; the views borrow the current line buffer
/// and must not be retained past the call. Handlers run synchronously inside
/// the dispatch cycle and must not suspend the coroutine.
///
/// Console write errors returned here are logged by the dispatcher and never
/// propagate further.
///
/// Blanket-implemented for plain functions and closures:
///
/// ```rust
/// use brrtconsole::console::ConsoleSink;
///
/// fn status(argv: &[&str], console: &mut dyn ConsoleSink) -> std::io::Result<()> {
///     console.write_line(&format!("status: {} args", argv.len() - 1))
/// }
/// ```
pub trait CommandHandler: Send + Sync {
    /// Handle one dispatched command line.
    fn handle(&self, argv: &[&str], console: &mut dyn ConsoleSink) -> io::Result<()>;
}

impl<F> CommandHandler for F
where
    F: Fn(&[&str], &mut dyn ConsoleSink) -> io::Result<()> + Send + Sync,
{
    fn handle(&self, argv: &[&str], console: &mut dyn ConsoleSink) -> io::Result<()> {
        self(argv, console)
    }
}

/// One registered command: name, handler, and help text.
///
/// The help text excludes the command name itself; the help command prepends
/// it when printing usage. Entries are immutable once registered.
///
/// Name and help are `Arc<str>`: they are fixed at registration, and cloning
/// an entry is O(1) reference bumps rather than string copies.
#[derive(Clone)]
pub struct CommandEntry {
    name: Arc<str>,
    help: Arc<str>,
    handler: Arc<dyn CommandHandler>,
}

impl CommandEntry {
    /// Create an entry. `name` must be non-empty (caller contract).
    pub fn new(name: &str, help: &str, handler: impl CommandHandler + 'static) -> Self {
        debug_assert!(!name.is_empty(), "command name must be non-empty");
        CommandEntry {
            name: Arc::from(name),
            help: Arc::from(help),
            handler: Arc::new(handler),
        }
    }

    /// The command name, matched case-sensitively against `argv[0]`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The usage string, excluding the command name.
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }
}

/// Ordered registry of [`CommandEntry`] values.
///
/// Insertion order is preserved: lookup is a linear scan and the help
/// listing prints in registration order. Name uniqueness is a caller
/// invariant, not enforced - a duplicate registration is unreachable because
/// the first match wins, and is logged at warn level.
#[derive(Clone, Default)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command by parts. See [`CommandTable::register_entry`].
    pub fn register(
        &mut self,
        name: &str,
        help: &str,
        handler: impl CommandHandler + 'static,
    ) -> &mut Self {
        self.register_entry(CommandEntry::new(name, help, handler));
        self
    }

    /// Append an entry to the table.
    ///
    /// An entry named `help` is accepted but will never be dispatched: the
    /// built-in help intercept answers first. Same for a name already in the
    /// table - lookup stops at the first match. Both cases are logged so the
    /// shadowing is visible operationally.
    pub fn register_entry(&mut self, entry: CommandEntry) {
        if entry.name() == HELP_COMMAND {
            warn!(
                command = %entry.name(),
                "registered command is masked by the built-in help intercept"
            );
        } else if self.lookup(entry.name()).is_some() {
            warn!(
                command = %entry.name(),
                "duplicate command name - earlier registration wins"
            );
        }

        info!(
            command = %entry.name(),
            total_commands = self.entries.len() + 1,
            "Command registered"
        );
        self.entries.push(entry);
    }

    /// Find the first entry whose name equals `name` exactly.
    ///
    /// Linear scan, O(number of commands). Tables in the target domain hold
    /// tens of entries, so this beats requiring a sorted table or a hashing
    /// structure; a sorted table with binary search is the obvious upgrade
    /// if that stops being true.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.name.as_ref() == name)
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Malformed-line conditions reported on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineError {
    /// The source's buffer filled before the line terminator.
    BufferOverflow,
    /// A trailing fragment of an oversized line was discarded.
    FlushToEol,
}

impl LineError {
    fn label(self) -> &'static str {
        match self {
            LineError::BufferOverflow => "BufferOverflow",
            LineError::FlushToEol => "FlushToEOL",
        }
    }
}

/// The command dispatch loop: one cooperative task awaiting lines from a
/// [`LineSource`], dispatching them against a [`CommandTable`], and writing
/// diagnostics and help text to a [`ConsoleSink`].
///
/// Construction takes the table by value; registration happens before the
/// loop starts and the table is read-only from then on (callers that need to
/// inspect it afterwards keep a clone - entries are `Arc`-backed and cheap).
///
/// Drive it with [`run`](CommandDispatcher::run) from an existing coroutine
/// or thread, or move it onto its own coroutine with
/// [`spawn`](CommandDispatcher::spawn).
pub struct CommandDispatcher<S, C> {
    source: S,
    console: C,
    table: CommandTable,
    line_seq: u64,
}

impl<S: LineSource, C: ConsoleSink> CommandDispatcher<S, C> {
    /// Create a dispatcher over a line source, a console sink, and a
    /// registered command table.
    pub fn new(source: S, console: C, table: CommandTable) -> Self {
        CommandDispatcher {
            source,
            console,
            table,
            line_seq: 0,
        }
    }

    /// The console sink, for transcript inspection after the loop ends.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Tear the dispatcher apart, returning source, console, and table.
    pub fn into_parts(self) -> (S, C, CommandTable) {
        (self.source, self.console, self.table)
    }

    /// Run the dispatch loop until the line source closes.
    ///
    /// Awaiting the next outcome is the loop's only suspension point; every
    /// clean line is tokenized and dispatched synchronously to completion,
    /// in arrival order. Malformed input is reported on the console and
    /// recovered in-loop; nothing propagates to the caller.
    pub fn run(&mut self) {
        info!(commands = self.table.len(), "command dispatcher started");
        while let Some(outcome) = self.source.next_line() {
            self.line_seq += 1;
            match outcome {
                ReadOutcome::Line(line) => self.process_line(&line),
                ReadOutcome::Overflow(partial) => {
                    self.report_line_error(LineError::BufferOverflow, &partial);
                    if !self.recover_overflow() {
                        break;
                    }
                }
            }
        }
        info!(
            lines = self.line_seq,
            "line source closed, command dispatcher stopping"
        );
    }

    /// Move the dispatcher onto its own coroutine and return the join
    /// handle. The coroutine stack size comes from
    /// [`RuntimeConfig::from_env`].
    ///
    /// # Safety
    ///
    /// This function is marked unsafe because it calls
    /// `may::coroutine::Builder::spawn()`, which is unsafe in the `may`
    /// runtime. The caller must ensure the may runtime is initialized before
    /// calling this.
    pub unsafe fn spawn(mut self) -> io::Result<coroutine::JoinHandle<()>>
    where
        S: Send + 'static,
        C: Send + 'static,
    {
        let stack_size = RuntimeConfig::from_env().stack_size;
        debug!(stack_size, "spawning command dispatcher coroutine");
        // SAFETY: spawn is unsafe per the may runtime's requirements, not
        // this function's logic. The dispatcher is moved whole into the
        // coroutine, so nothing dangles.
        unsafe {
            coroutine::Builder::new()
                .name("command_dispatcher".to_string())
                .stack_size(stack_size)
                .spawn(move || self.run())
        }
    }

    /// Discard trailing fragments of an oversized line until its true
    /// terminator arrives. Returns `false` if the source closed instead.
    fn recover_overflow(&mut self) -> bool {
        debug!(line_seq = self.line_seq, "entering overflow recovery");
        loop {
            match self.source.next_line() {
                Some(ReadOutcome::Overflow(fragment)) => {
                    self.report_line_error(LineError::FlushToEol, &fragment);
                }
                Some(ReadOutcome::Line(_tail)) => {
                    // The terminated fragment is the tail of the oversized
                    // line, not a fresh command.
                    debug!("oversized line terminated, tail discarded");
                    return true;
                }
                None => return false,
            }
        }
    }

    /// Tokenize one clean line and run the help intercept or table dispatch.
    fn process_line(&mut self, line: &str) {
        let argv = tokenize(line, ARGV_SIZE);
        if argv.is_empty() {
            return;
        }
        let command = argv[0];
        debug!(
            line_seq = self.line_seq,
            command = %command,
            argc = argv.len(),
            "line tokenized"
        );

        // The 'help' command is built-in and answers before table lookup.
        if command == HELP_COMMAND {
            self.help_command(&argv);
            return;
        }

        match self.table.lookup(command).cloned() {
            Some(entry) => self.invoke(&entry, &argv),
            None => self.unknown_command(command),
        }
    }

    /// Invoke a matched entry's handler with panic containment.
    fn invoke(&mut self, entry: &CommandEntry, argv: &[&str]) {
        let result = catch_unwind(AssertUnwindSafe(|| {
            entry.handler.handle(argv, &mut self.console)
        }));
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                warn!(command = %entry.name(), error = %e, "console write failed");
            }
            Err(panic) => {
                error!(
                    command = %entry.name(),
                    panic = ?panic,
                    "command handler panicked"
                );
            }
        }
    }

    /// Handle the built-in `help` command.
    fn help_command(&mut self, argv: &[&str]) {
        if argv.len() == 2 {
            let target = argv[1];
            if target == HELP_COMMAND {
                self.console_line(HELP_USAGE);
                return;
            }

            let usage = self
                .table
                .lookup(target)
                .map(|entry| format!("Usage: {} {}", entry.name(), entry.help()));
            match usage {
                Some(usage) => self.console_line(&usage),
                None => self.unknown_command(target),
            }
        } else {
            // Any other argc falls back to the banner.
            self.console_line(HELP_USAGE);
            let mut listing = String::from("Commands: help");
            for entry in self.table.iter() {
                listing.push(' ');
                listing.push_str(entry.name());
            }
            self.console_line(&listing);
        }
    }

    fn unknown_command(&mut self, name: &str) {
        warn!(command = %name, "unknown command");
        self.console_line(&format!("Unknown command: {name}"));
    }

    fn report_line_error(&mut self, error: LineError, payload: &str) {
        warn!(
            line_seq = self.line_seq,
            kind = error.label(),
            len = payload.len(),
            "malformed line"
        );
        self.console_line(&format!("{}: {}", error.label(), payload));
    }

    /// Best-effort console write; failures are logged, never propagated.
    fn console_line(&mut self, text: &str) {
        if let Err(e) = self.console.write_line(text) {
            warn!(error = %e, "console write failed");
        }
    }
}
