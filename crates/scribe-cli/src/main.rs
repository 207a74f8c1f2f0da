//! Scribe CLI - extract glossary term records and run the conformance suite.

use clap::Parser;
use scribe_cli::commands;
use scribe_cli::{Cli, Command};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> scribe_cli::Result<()> {
    let cli = Cli::parse();

    // Log to stderr so stdout carries only rendered output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let output = match cli.command_or_default() {
        Command::Extract(args) => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            commands::execute_extract(&args, &text)?
        }
        Command::Tck(args) => commands::execute_tck(args)? + "\n",
        Command::Config => commands::execute_config()?,
    };

    print!("{}", output);
    Ok(())
}
