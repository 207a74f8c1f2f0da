//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scribe - Extract glossary term records from bilingual engineering text.
#[derive(Debug, Parser)]
#[command(name = "scribe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Command to run; `extract` when none was given.
    ///
    /// The default goes through clap so `SCRIBE_CONFIG` still applies.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Extract(ExtractArgs::parse_from(["extract"])))
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read a passage from stdin and print the extracted records (default)
    Extract(ExtractArgs),

    /// Run the L0/L1/L2 conformance suite
    Tck(TckArgs),

    /// Print the default extractor configuration as TOML
    Config,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Indented key/value listing (default)
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the extract command.
#[derive(Debug, Default, Parser)]
pub struct ExtractArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: CliFormat,

    /// Validate the output against this rule document (JSON or TOML)
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Extractor configuration file (TOML)
    #[arg(short, long, env = "SCRIBE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for the tck command.
#[derive(Debug, Parser)]
pub struct TckArgs {
    /// Suite layout file
    #[arg(short, long, default_value = "tck.toml")]
    pub config: PathBuf,

    /// Override the L1 case used as L2 input
    #[arg(short, long)]
    pub anchor: Option<String>,
}
