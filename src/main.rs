//! Monpoke CLI - play a match from a command file or standard input.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use monpoke::SessionEnd;
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Monpoke - a two-team creature battle simulator
#[derive(Parser, Debug)]
#[command(name = "monpoke")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Log every executed command to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors to stderr
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a match, printing one result per command
    Play {
        /// Command file (default: read standard input)
        input: Option<std::path::PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Report rejected commands and keep going instead of stopping
        #[arg(long)]
        continue_on_error: bool,
    },

    /// Check that every line of a command file parses
    Validate {
        /// Command file to validate
        #[arg(required = true)]
        input: std::path::PathBuf,
    },
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` applies unless `--verbose` or `--quiet` is given.
fn init_tracing(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose, args.quiet);

    let result = match args.command {
        Commands::Play {
            input,
            format,
            continue_on_error,
        } => cli::play::execute(input, format, continue_on_error).map(|end| end != SessionEnd::Halted),

        Commands::Validate { input } => cli::validate::execute(input).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
