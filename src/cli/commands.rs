use std::io;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::console::WriterSink;
use crate::dispatcher::{CommandDispatcher, CommandTable};
use crate::echo::{add_handler, echo_handler};
use crate::runtime_config::RuntimeConfig;
use crate::source::{ReaderLineSource, DEFAULT_MAX_LINE_LEN};

/// Command-line interface for the demo console binary
#[derive(Parser)]
#[command(name = "brrtconsole-demo")]
#[command(about = "brrtconsole demo console", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the console on stdin/stdout with the sample command set
    Run {
        /// Line buffer capacity in bytes; longer input lines overflow and
        /// are discarded with diagnostics
        #[arg(long, default_value_t = DEFAULT_MAX_LINE_LEN)]
        max_line_len: usize,
    },
}

/// The sample command set served by the demo binary: `echo` and `add`.
#[must_use]
pub fn sample_table() -> CommandTable {
    let mut table = CommandTable::new();
    table.register("echo", "[args ...]", echo_handler);
    table.register("add", "n [n ...]", add_handler);
    table
}

/// Parse arguments and run the selected command.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run { max_line_len } => run_console(max_line_len),
    }
}

fn run_console(max_line_len: usize) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = RuntimeConfig::from_env();
    may::config().set_stack_size(config.stack_size);

    let source = ReaderLineSource::with_max_line_len(io::stdin(), max_line_len);
    let console = WriterSink::new(io::stdout());
    let dispatcher = CommandDispatcher::new(source, console, sample_table());

    // SAFETY: the may runtime is configured above and nothing else is
    // running on it yet.
    let handle = unsafe { dispatcher.spawn()? };
    handle
        .join()
        .map_err(|e| anyhow!("dispatcher coroutine failed: {e:?}"))?;
    Ok(())
}
