//! Output-boundary rendering.
//!
//! `Display` on `Value` is always plain text. Terminal styling (the red
//! `Kosa: ` label on errors) is applied only here, when a value is written
//! to the user, so styled text never ends up inside stored strings.

use std::io::{self, Write};

use crate::value::Value;

/// Fixed label printed before every error message.
pub const ERROR_LABEL: &str = "Kosa: ";

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[31m"; // Red
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for rendered values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Renders values for display, optionally with terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    colors: bool,
}

impl Renderer {
    /// Create a renderer from a color mode.
    ///
    /// # Arguments
    ///
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn new(mode: ColorMode, is_tty: bool) -> Self {
        Renderer {
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// A renderer that never emits escape codes.
    pub const fn plain() -> Self {
        Renderer { colors: false }
    }

    pub fn uses_colors(&self) -> bool {
        self.colors
    }

    /// Render `value` as the user should see it.
    pub fn render(&self, value: &Value) -> String {
        match value {
            Value::Error(err) if self.colors => format!(
                "{}{ERROR_LABEL}{}{}",
                colors::ERROR,
                colors::RESET,
                err.message()
            ),
            Value::Return(inner) => self.render(inner),
            other => other.to_string(),
        }
    }

    /// Write the rendering of `value` followed by a newline.
    pub fn write_line<W: Write>(&self, writer: &mut W, value: &Value) -> io::Result<()> {
        writeln!(writer, "{}", self.render(value))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::plain()
    }
}
