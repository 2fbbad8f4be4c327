// External crates
use clap::Parser;
use tracing::info;

// Internal imports
use hlsclt_core::hls_error;

// Local modules
mod cli;
mod commands;
mod error;

use cli::Args;
use commands::execute_command;

fn main() {
    let args = Args::parse();

    // Tests expect clean output, so logging stays off in test mode
    let default_level = if args.debug { "debug" } else { "warn" };
    let log_guard = if std::env::var("HLSCLT_TEST_MODE").is_err() {
        hlsclt_logging::init_subscriber(default_level)
    } else {
        None
    };

    info!(command = ?args.command, "Starting hlsclt");

    if let Err(e) = execute_command(args) {
        hls_error!("{}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}
