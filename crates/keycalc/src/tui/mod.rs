//! Terminal front end
//!
//! A keypad and a display drawn with ratatui. Keys are typed or clicked; the
//! display text is fitted to the terminal width after every press and resize.

mod app;
mod input;
mod keypad;
mod runner;
mod theme;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonKind, Keypad, KeypadButton, KeypadWidget};
pub use runner::{run, CrosstermEvents, EventSource, TICK};
pub use theme::Palette;
pub use ui::{render, AppLayout, CalculatorUI, CALC_WIDTH, HELP_SHORTCUTS};
