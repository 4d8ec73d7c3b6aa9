//! diffcompact CLI
//!
//! Command-line interface for compact expected/actual comparisons

use clap::{Parser, Subcommand};
use diffcompact_core::logging_facility::{init, Profile};

mod commands;

/// Exit code when the command itself failed (bad input, unreadable file).
const EXIT_ERROR: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "diffcompact")]
#[command(about = "diffcompact - Compact expected/actual failure messages", long_about = None)]
struct Cli {
    /// Emit debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two values and print the compacted message
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();
    if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
    };

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}
