//! keycalc command-line front end
//!
//! Starts the interactive calculator or presses keys on a headless tracker
//! for scripts and tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod error;
pub mod handlers;
pub mod logging;
pub mod terminal;

pub use commands::{Cli, Commands, LogFormat, PressArgs};
pub use error::{CliError, CliResult};
pub use handlers::{load_config, PressReport, PressStep};
pub use logging::LogOptions;
