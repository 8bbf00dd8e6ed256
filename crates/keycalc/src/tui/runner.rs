//! Event loop

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use tracing::{debug, info};

use super::app::CalculatorApp;
use super::ui::{render, AppLayout};

/// How long a key stays highlighted when nothing else happens
pub const TICK: Duration = Duration::from_millis(150);

/// Source of terminal events
pub trait EventSource {
    /// Waits up to `timeout` for the next event. `Ok(None)` means the wait
    /// timed out.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Events read from the real terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// A fixed script of events. Running out of events is an error so a script
/// without a quit key cannot hang.
impl EventSource for VecDeque<Event> {
    fn next_event(&mut self, _timeout: Duration) -> io::Result<Option<Event>> {
        self.pop_front().map(Some).ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted")
        })
    }
}

fn layout_for(width: u16, height: u16) -> AppLayout {
    AppLayout::new(Rect::new(0, 0, width, height))
}

/// Draws and handles events until the app asks to quit
pub fn run<B, E>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
    events: &mut E,
) -> io::Result<()>
where
    B: Backend,
    E: EventSource,
{
    info!("calculator started");
    let size = terminal.size()?;
    let mut layout = layout_for(size.width, size.height);
    app.resize_display(layout.display_width());

    while !app.should_quit() {
        terminal.draw(|frame| render(app, frame))?;

        match events.next_event(TICK)? {
            Some(Event::Key(key)) => {
                app.handle_key(key);
            }
            Some(Event::Mouse(mouse)) => {
                app.handle_mouse(mouse, layout.keypad);
            }
            Some(Event::Resize(width, height)) => {
                debug!(width, height, "terminal resized");
                layout = layout_for(width, height);
                app.resize_display(layout.display_width());
            }
            Some(_) => {}
            None => app.release_keys(),
        }
    }

    info!(display = %app.display(), "calculator stopped");
    Ok(())
}
