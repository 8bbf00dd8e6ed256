//! keycalc: keypad calculator
//!
//! ```bash
//! keycalc                      # Interactive calculator
//! keycalc press "5+3="         # Print the display after pressing keys
//! keycalc press "1/0=" --json  # Full state as JSON
//! keycalc config               # Effective configuration
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use keycalc_cli::{handlers, load_config, logging, terminal, Cli, CliResult, Commands, LogOptions};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let command = cli.command();

    logging::init(&LogOptions::from_cli(&cli), command == Commands::Run)?;
    let config = load_config(cli.config.as_deref())?;

    match command {
        Commands::Run => terminal::run_tui(&config),
        Commands::Press(args) => {
            let report = handlers::press(&config, &args)?;
            print(&handlers::render_press(&report, args.json)?)
        }
        Commands::Config => print(&handlers::render_config(&config)?),
    }
}

fn print(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
