//! Calculator configuration
//!
//! Loaded from a YAML file. Every section and field is optional; missing
//! values fall back to the defaults below.
//!
//! ```yaml
//! display:
//!   max_font: large
//!   min_font: small
//! errors:
//!   style: uniform
//!   message: Not a number
//! theme:
//!   background: "#1C1C1C"
//!   digit: "#808080"
//!   function: "#505050"
//!   operator: "#FF9500"
//!   text: "#DCDCDC"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::tracker::DEFAULT_ERROR_MESSAGE;
use crate::core::{ErrorStyle, InputTracker};
use crate::display::FontSize;

/// Errors raised while loading or checking a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// YAML could not be parsed into a configuration
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// Values parsed but do not make sense together
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Display font bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Largest font the display may use
    pub max_font: FontSize,
    /// Smallest font the display may shrink to before clipping
    pub min_font: FontSize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_font: FontSize::Large,
            min_font: FontSize::Small,
        }
    }
}

/// How evaluation failures are shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorConfig {
    /// Uniform or detailed wording
    pub style: ErrorStyle,
    /// Text shown in uniform mode
    pub message: String,
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self {
            style: ErrorStyle::Uniform,
            message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Colours as `#RRGGBB` or ratatui colour names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window and display background
    pub background: String,
    /// Digit and point keys
    pub digit: String,
    /// Clear, sign toggle and remainder keys
    pub function: String,
    /// Arithmetic operator and equals keys
    pub operator: String,
    /// Display and key labels
    pub text: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#1C1C1C".to_string(),
            digit: "#808080".to_string(),
            function: "#505050".to_string(),
            operator: "#FF9500".to_string(),
            text: "#DCDCDC".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Colour fields paired with their names
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("background", self.background.as_str()),
            ("digit", self.digit.as_str()),
            ("function", self.function.as_str()),
            ("operator", self.operator.as_str()),
            ("text", self.text.as_str()),
        ]
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Display settings
    pub display: DisplayConfig,
    /// Error reporting
    pub errors: ErrorConfig,
    /// Colours
    pub theme: ThemeConfig,
}

impl CalcConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and validates a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates YAML text. An empty document yields the defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Checks that values are consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.min_font > self.display.max_font {
            return Err(ConfigError::invalid(format!(
                "display.min_font ({:?}) is larger than display.max_font ({:?})",
                self.display.min_font, self.display.max_font
            )));
        }
        if self.errors.message.trim().is_empty() {
            return Err(ConfigError::invalid("errors.message must not be empty"));
        }
        for (name, value) in self.theme.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(format!(
                    "theme.{name} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Set the font bounds
    #[must_use]
    pub const fn with_fonts(mut self, max: FontSize, min: FontSize) -> Self {
        self.display.max_font = max;
        self.display.min_font = min;
        self
    }

    /// Set the error wording
    #[must_use]
    pub fn with_error_style(mut self, style: ErrorStyle) -> Self {
        self.errors.style = style;
        self
    }

    /// Set the uniform error message
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.errors.message = message.into();
        self
    }

    /// A fresh tracker using this configuration's error policy
    #[must_use]
    pub fn tracker(&self) -> InputTracker {
        InputTracker::new().with_error_policy(self.errors.style, self.errors.message.clone())
    }
}
