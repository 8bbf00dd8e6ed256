//! Interactive terminal session

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keycalc::config::CalcConfig;
use keycalc::tui::{self, CalculatorApp, CrosstermEvents};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use crate::error::{CliError, CliResult};

/// Raw-mode alternate screen, restored on drop
#[derive(Debug)]
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Switches stdout to raw mode and the alternate screen
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    /// The ratatui terminal
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// Runs the interactive calculator until the user quits
pub fn run_tui(config: &CalcConfig) -> CliResult<()> {
    if !io::stdout().is_terminal() {
        return Err(CliError::terminal(
            "the calculator needs an interactive terminal; use `keycalc press` for scripts",
        ));
    }

    let mut app = CalculatorApp::from_config(config)?;
    let mut session =
        TerminalSession::enter().map_err(|e| CliError::terminal(format!("setup failed: {e}")))?;

    tui::run(session.terminal_mut(), &mut app, &mut CrosstermEvents)
        .map_err(|e| CliError::terminal(e.to_string()))
}
