//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// keycalc: a keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (YAML)
    #[arg(long, env = "KEYCALC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log line format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Subcommand to run; starts the calculator when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand, defaulting to the interactive calculator
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive calculator
    Run,

    /// Press keys without a terminal UI and print the display
    ///
    /// Each character of KEYS is one key label: digits, `.`, `+ - * / %`
    /// (or `÷ ×`), `=`, `C` and `±`. Whitespace is skipped.
    Press(PressArgs),

    /// Print the effective configuration as YAML
    Config,
}

/// Arguments for the press command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct PressArgs {
    /// Key labels to press, in order
    #[arg(allow_hyphen_values = true)]
    pub keys: String,

    /// Print the display after every key
    #[arg(long)]
    pub steps: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
