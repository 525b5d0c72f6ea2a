//! Tests for the command dispatch loop and handler invocation
//!
//! # Test Coverage
//!
//! Validates the dispatcher's core responsibilities:
//! - Routing lines to the matching command handler, and only that handler
//! - Argument vector contents (argv[0] = command name) and truncation
//! - Unknown-command diagnostics
//! - Strict arrival-order processing
//! - Loop survival across handler errors and panics
//! - Running the loop on its own `may` coroutine
//!
//! # Test Strategy
//!
//! Tests drive the real loop through a channel line source and assert the
//! exact console transcript through a capture sink. Feeding every line and
//! dropping the feeder up front closes the stream, so `run()` returns once
//! the input is drained.

mod common;

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use brrtconsole::console::{CaptureSink, ConsoleSink};
use brrtconsole::dispatcher::{CommandDispatcher, CommandTable};
use brrtconsole::source::channel;
use brrtconsole::tokenizer::ARGV_SIZE;

use common::shared_sink::SharedSink;
use common::stack::set_stack_size;
use tracing_util::TestTracing;

/// Feed `lines` as clean input, run the loop to stream close, and return
/// the console transcript.
fn run_lines(table: CommandTable, lines: &[&str]) -> Vec<String> {
    let (feeder, source) = channel();
    for line in lines {
        assert!(feeder.feed_line(*line));
    }
    drop(feeder);

    let mut dispatcher = CommandDispatcher::new(source, CaptureSink::new(), table);
    dispatcher.run();
    let (_, mut console, _) = dispatcher.into_parts();
    console.take_lines()
}

fn counting_handler(
    hits: &Arc<AtomicUsize>,
) -> impl Fn(&[&str], &mut dyn ConsoleSink) -> io::Result<()> + Send + Sync {
    let hits = Arc::clone(hits);
    move |_argv: &[&str], _console: &mut dyn ConsoleSink| -> io::Result<()> {
        hits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn test_dispatches_to_matching_handler_only() {
    let _tracing = TestTracing::init();
    let greet_hits = Arc::new(AtomicUsize::new(0));
    let other_hits = Arc::new(AtomicUsize::new(0));
    let seen_argv: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let mut table = CommandTable::new();
    {
        let hits = Arc::clone(&greet_hits);
        let seen = Arc::clone(&seen_argv);
        table.register(
            "greet",
            "who ...",
            move |argv: &[&str], _console: &mut dyn ConsoleSink| -> io::Result<()> {
                hits.fetch_add(1, Ordering::SeqCst);
                seen.lock().unwrap().extend(argv.iter().map(|s| s.to_string()));
                Ok(())
            },
        );
    }
    table.register("other", "", counting_handler(&other_hits));

    let transcript = run_lines(table, &["greet x y"]);

    assert_eq!(greet_hits.load(Ordering::SeqCst), 1);
    assert_eq!(other_hits.load(Ordering::SeqCst), 0);
    assert_eq!(*seen_argv.lock().unwrap(), ["greet", "x", "y"]);
    assert!(transcript.is_empty());
}

#[test]
fn test_unknown_command_reports_once_without_dispatch() {
    let _tracing = TestTracing::init();
    let hits = Arc::new(AtomicUsize::new(0));

    let mut table = CommandTable::new();
    table.register("known", "", counting_handler(&hits));

    let transcript = run_lines(table, &["bogus a b"]);

    assert_eq!(transcript, ["Unknown command: bogus"]);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn test_empty_and_whitespace_lines_are_ignored() {
    let _tracing = TestTracing::init();
    let hits = Arc::new(AtomicUsize::new(0));

    let mut table = CommandTable::new();
    table.register("ping", "", counting_handler(&hits));

    let transcript = run_lines(table, &["", "  \t ", "ping"]);

    assert!(transcript.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_excess_tokens_truncate_silently() {
    let _tracing = TestTracing::init();
    let seen_argc = Arc::new(AtomicUsize::new(0));

    let mut table = CommandTable::new();
    {
        let argc = Arc::clone(&seen_argc);
        table.register(
            "wide",
            "",
            move |argv: &[&str], _console: &mut dyn ConsoleSink| -> io::Result<()> {
                argc.store(argv.len(), Ordering::SeqCst);
                Ok(())
            },
        );
    }

    // 1 command + 11 arguments: two past the limit.
    let transcript = run_lines(table, &["wide a b c d e f g h i j k"]);

    assert_eq!(seen_argc.load(Ordering::SeqCst), ARGV_SIZE);
    assert!(transcript.is_empty());
}

#[test]
fn test_lines_dispatch_in_arrival_order() {
    let _tracing = TestTracing::init();

    let mut table = CommandTable::new();
    table.register(
        "tag",
        "value",
        |argv: &[&str], console: &mut dyn ConsoleSink| -> io::Result<()> {
            console.write_line(argv[1])
        },
    );

    let transcript = run_lines(table, &["tag 1", "tag 2", "tag 3"]);
    assert_eq!(transcript, ["1", "2", "3"]);
}

#[test]
fn test_handler_write_error_does_not_stop_loop() {
    let _tracing = TestTracing::init();
    let hits = Arc::new(AtomicUsize::new(0));

    let mut table = CommandTable::new();
    table.register(
        "fail",
        "",
        |_argv: &[&str], _console: &mut dyn ConsoleSink| -> io::Result<()> {
            Err(io::Error::other("sink went away"))
        },
    );
    table.register("ping", "", counting_handler(&hits));

    let transcript = run_lines(table, &["fail", "ping"]);

    // The error is logged, not printed; the next line still dispatches.
    assert!(transcript.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_handler_panic_is_contained() {
    let _tracing = TestTracing::init();
    let hits = Arc::new(AtomicUsize::new(0));

    let mut table = CommandTable::new();
    table.register(
        "boom",
        "",
        |_argv: &[&str], _console: &mut dyn ConsoleSink| -> io::Result<()> {
            panic!("boom! - watch to see if I recover");
        },
    );
    table.register("ping", "", counting_handler(&hits));

    let transcript = run_lines(table, &["boom", "ping"]);

    assert!(transcript.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_spawned_dispatcher_drains_feeder_and_joins() {
    let _tracing = TestTracing::init();
    set_stack_size();

    let mut table = CommandTable::new();
    table.register(
        "say",
        "text ...",
        |argv: &[&str], console: &mut dyn ConsoleSink| -> io::Result<()> {
            console.write_line(&argv[1..].join(" "))
        },
    );

    let (feeder, source) = channel();
    let sink = SharedSink::new();
    let dispatcher = CommandDispatcher::new(source, sink.clone(), table);

    // SAFETY: may runtime configured by set_stack_size above.
    let handle = unsafe { dispatcher.spawn() }.expect("spawn dispatcher");

    assert!(feeder.feed_line("say hello from a coroutine"));
    assert!(feeder.feed_line("say goodbye"));
    drop(feeder);

    handle.join().expect("dispatcher join");
    assert_eq!(sink.lines(), ["hello from a coroutine", "goodbye"]);
}
