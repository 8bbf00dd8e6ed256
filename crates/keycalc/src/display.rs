//! Display font sizing
//!
//! The display shows numbers in one of three fonts: a five-row block font, a
//! three-row box-drawing font and plain text. Before each render the largest
//! font that fits the display width is picked, never going below the
//! configured minimum. Text that does not fit even at the minimum is clipped
//! on the left so the least significant digits stay visible.

use serde::{Deserialize, Serialize};

/// Columns between two glyphs
const GLYPH_GAP: u16 = 1;

/// Display font size, ordered from smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    /// Plain one-row text; renders any character
    Small,
    /// Three-row box-drawing digits
    Medium,
    /// Five-row block digits
    #[default]
    Large,
}

impl FontSize {
    /// Height in terminal rows
    #[must_use]
    pub const fn rows(self) -> u16 {
        match self {
            Self::Small => 1,
            Self::Medium => 3,
            Self::Large => 5,
        }
    }

    /// Next size down, if any
    #[must_use]
    pub const fn smaller(self) -> Option<Self> {
        match self {
            Self::Large => Some(Self::Medium),
            Self::Medium => Some(Self::Small),
            Self::Small => None,
        }
    }
}

static LARGE_DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];
static LARGE_POINT: [&str; 5] = [" ", " ", " ", " ", "█"];
static LARGE_MINUS: [&str; 5] = ["   ", "   ", "███", "   ", "   "];

static MEDIUM_DIGITS: [[&str; 3]; 10] = [
    ["┌─┐", "│ │", "└─┘"],
    ["  ╷", "  │", "  ╵"],
    ["╶─┐", "┌─┘", "└─╴"],
    ["╶─┐", " ─┤", "╶─┘"],
    ["╷ ╷", "└─┤", "  ╵"],
    ["┌─╴", "└─┐", "╶─┘"],
    ["┌─╴", "├─┐", "└─┘"],
    ["╶─┐", "  │", "  ╵"],
    ["┌─┐", "├─┤", "└─┘"],
    ["┌─┐", "└─┤", "╶─┘"],
];
static MEDIUM_POINT: [&str; 3] = [" ", " ", "."];
static MEDIUM_MINUS: [&str; 3] = ["   ", "╶─╴", "   "];

/// Rows of the glyph for `ch`, or None if the font has no such glyph.
/// Small has no glyph table; it prints characters as they are.
fn glyph(ch: char, size: FontSize) -> Option<&'static [&'static str]> {
    match size {
        FontSize::Small => None,
        FontSize::Medium => match ch {
            '.' => Some(&MEDIUM_POINT[..]),
            '-' => Some(&MEDIUM_MINUS[..]),
            _ => ch.to_digit(10).map(|d| &MEDIUM_DIGITS[d as usize][..]),
        },
        FontSize::Large => match ch {
            '.' => Some(&LARGE_POINT[..]),
            '-' => Some(&LARGE_MINUS[..]),
            _ => ch.to_digit(10).map(|d| &LARGE_DIGITS[d as usize][..]),
        },
    }
}

fn glyph_width(rows: &[&str]) -> u16 {
    rows.first().map_or(0, |row| row.chars().count() as u16)
}

/// Rendered width of `text` in columns, or None if `size` cannot draw it
#[must_use]
pub fn measure(text: &str, size: FontSize) -> Option<u16> {
    if size == FontSize::Small {
        return Some(text.chars().count() as u16);
    }

    let mut width: u16 = 0;
    for (i, ch) in text.chars().enumerate() {
        let rows = glyph(ch, size)?;
        if i > 0 {
            width = width.saturating_add(GLYPH_GAP);
        }
        width = width.saturating_add(glyph_width(rows));
    }
    Some(width)
}

/// Renders `text` as `size.rows()` lines, or None if `size` cannot draw it
#[must_use]
pub fn render_lines(text: &str, size: FontSize) -> Option<Vec<String>> {
    if size == FontSize::Small {
        return Some(vec![text.to_string()]);
    }

    let glyphs = text
        .chars()
        .map(|ch| glyph(ch, size))
        .collect::<Option<Vec<_>>>()?;
    let gap = " ".repeat(GLYPH_GAP as usize);

    let lines = (0..size.rows() as usize)
        .map(|row| {
            glyphs
                .iter()
                .map(|rows| rows[row])
                .collect::<Vec<_>>()
                .join(&gap)
        })
        .collect();
    Some(lines)
}

/// Text prepared for a display of a given width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittedText {
    /// Chosen font
    pub size: FontSize,
    /// Text to draw, possibly missing leading characters
    pub text: String,
    /// Whether leading characters were dropped
    pub clipped: bool,
}

impl FittedText {
    /// Rendered lines of the fitted text
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        render_lines(&self.text, self.size).unwrap_or_else(|| vec![self.text.clone()])
    }
}

/// Picks the largest font between `min` and `max` that fits `text` into
/// `width` columns.
///
/// Characters without a glyph force the plain font. If the text is still too
/// wide at the smallest allowed size, leading characters are dropped.
#[must_use]
pub fn fit(text: &str, width: u16, max: FontSize, min: FontSize) -> FittedText {
    let (max, min) = if max >= min { (max, min) } else { (min, max) };

    let mut size = max;
    loop {
        if measure(text, size).is_some_and(|w| w <= width) {
            return FittedText {
                size,
                text: text.to_string(),
                clipped: false,
            };
        }
        match size.smaller() {
            Some(next) if next >= min => size = next,
            _ => break,
        }
    }

    if measure(text, size).is_none() {
        size = FontSize::Small;
        if measure(text, size).is_some_and(|w| w <= width) {
            return FittedText {
                size,
                text: text.to_string(),
                clipped: false,
            };
        }
    }

    let chars: Vec<char> = text.chars().collect();
    for start in 1..chars.len() {
        let tail: String = chars[start..].iter().collect();
        if measure(&tail, size).is_some_and(|w| w <= width) {
            return FittedText {
                size,
                text: tail,
                clipped: true,
            };
        }
    }

    FittedText {
        size,
        text: String::new(),
        clipped: !text.is_empty(),
    }
}
