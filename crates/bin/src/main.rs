use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

/// Exit status for `equal` when the documents differ
const EXIT_DIFFERENT: u8 = 1;
/// Exit status for any failure, kept apart from "different" like cmp and diff do
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays a clean document
    let directive = if cli.verbose {
        "deepnest=debug"
    } else {
        "deepnest=info"
    };
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("Error: invalid log directive {directive}: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    ExitCode::from(exit_status(run(&cli)))
}

/// Runs the selected command, returning the exit status on success
fn run(cli: &Cli) -> Result<u8, Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Merge(args) => commands::merge::run(args, cli.format)?,
        Commands::Equal(args) => {
            if !commands::equal::run(args, cli.format)? {
                return Ok(EXIT_DIFFERENT);
            }
        }
        Commands::Keys(args) => commands::keys::run(args, cli.format)?,
        Commands::StringifyValues(args) => commands::values::run(args, cli.format)?,
    }
    Ok(0)
}

fn exit_status(result: Result<u8, Box<dyn std::error::Error>>) -> u8 {
    match result {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}
