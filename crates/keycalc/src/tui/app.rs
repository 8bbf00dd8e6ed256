//! TUI application state

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tracing::debug;

use crate::config::{CalcConfig, ConfigError};
use crate::core::{Button, InputTracker};
use crate::display::{fit, FittedText, FontSize};
use crate::tui::input::{InputHandler, KeyAction};
use crate::tui::keypad::Keypad;
use crate::tui::theme::Palette;
use crate::tui::ui::DEFAULT_DISPLAY_WIDTH;

/// Calculator view-model: the tracker plus everything needed to draw it
#[derive(Debug)]
pub struct CalculatorApp {
    tracker: InputTracker,
    keypad: Keypad,
    palette: Palette,
    input: InputHandler,
    max_font: FontSize,
    min_font: FontSize,
    display_width: u16,
    fitted: FittedText,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        let config = CalcConfig::default();
        Self::with_parts(config.tracker(), Palette::default(), &config)
    }

    /// Creates a calculator app from a configuration
    pub fn from_config(config: &CalcConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = Palette::from_theme(&config.theme)?;
        Ok(Self::with_parts(config.tracker(), palette, config))
    }

    fn with_parts(tracker: InputTracker, palette: Palette, config: &CalcConfig) -> Self {
        let mut app = Self {
            tracker,
            keypad: Keypad::new(),
            palette,
            input: InputHandler::new(),
            max_font: config.display.max_font,
            min_font: config.display.min_font,
            display_width: DEFAULT_DISPLAY_WIDTH,
            fitted: fit("", 0, FontSize::Small, FontSize::Small),
            should_quit: false,
        };
        app.refit();
        app
    }

    /// Sets the display width in columns
    #[must_use]
    pub fn with_display_width(mut self, width: u16) -> Self {
        self.resize_display(width);
        self
    }

    /// The input tracker
    #[must_use]
    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    /// Text on the display
    #[must_use]
    pub fn display(&self) -> &str {
        self.tracker.display()
    }

    /// Expression buffer
    #[must_use]
    pub fn expression(&self) -> &str {
        self.tracker.expression()
    }

    /// Display text as fitted to the current width
    #[must_use]
    pub fn fitted(&self) -> &FittedText {
        &self.fitted
    }

    /// Current display font
    #[must_use]
    pub fn font_size(&self) -> FontSize {
        self.fitted.size
    }

    /// Display width in columns
    #[must_use]
    pub fn display_width(&self) -> u16 {
        self.display_width
    }

    /// The keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Colour palette
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a button, highlights its key and refits the display
    pub fn press(&mut self, button: Button) -> &str {
        self.tracker.press(button);
        self.keypad.highlight(button);
        self.refit();
        self.tracker.display()
    }

    /// Resets the calculator
    pub fn clear(&mut self) {
        self.press(Button::Clear);
    }

    /// Applies a key event
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyAction {
        let action = self.input.handle_key(event);
        match action {
            KeyAction::Press(button) => {
                self.press(button);
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        action
    }

    /// Applies a mouse event against the keypad drawn in `keypad_area`
    pub fn handle_mouse(&mut self, event: MouseEvent, keypad_area: Rect) -> Option<Button> {
        let (x, y) = self.input.handle_mouse(event)?;
        self.click(keypad_area, x, y)
    }

    /// Presses the key under `(x, y)`, if any
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Button> {
        let button = self.keypad.hit_test(keypad_area, x, y)?;
        debug!(x, y, label = %button.label(), "click");
        self.press(button);
        Some(button)
    }

    /// Releases the highlighted key
    pub fn release_keys(&mut self) {
        self.keypad.release_all();
    }

    /// Changes the display width and refits the text
    pub fn resize_display(&mut self, width: u16) {
        if width != self.display_width {
            self.display_width = width;
            self.refit();
        }
    }

    fn refit(&mut self) {
        let fitted = fit(
            self.tracker.display(),
            self.display_width,
            self.max_font,
            self.min_font,
        );
        if fitted.size != self.fitted.size {
            debug!(size = ?fitted.size, width = self.display_width, "display font changed");
        }
        self.fitted = fitted;
    }
}
