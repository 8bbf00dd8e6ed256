//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over `-v`/`-q`. The interactive calculator owns
//! the terminal, so it only logs when a log file is given.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::commands::{Cli, LogFormat};
use crate::error::{CliError, CliResult};

/// Where and how to log
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Count of `-v` flags
    pub verbose: u8,
    /// Only log errors
    pub quiet: bool,
    /// Log file; stderr when unset
    pub file: Option<PathBuf>,
    /// Line format
    pub format: LogFormat,
}

impl LogOptions {
    /// Options from parsed arguments
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            quiet: cli.quiet,
            file: cli.log_file.clone(),
            format: cli.log_format,
        }
    }

    /// Level used when `RUST_LOG` is not set
    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Installs the global subscriber.
///
/// With `interactive` set and no log file nothing is installed.
pub fn init(options: &LogOptions, interactive: bool) -> CliResult<()> {
    if interactive && options.file.is_none() {
        return Ok(());
    }

    let filter = EnvFilter::builder()
        .with_default_directive(options.level().into())
        .from_env_lossy();

    let (writer, ansi) = match &options.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    let result = match options.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| CliError::invalid_argument(format!("cannot initialize logging: {e}")))?;

    tracing::debug!(level = %options.level(), "logging initialized");
    Ok(())
}
