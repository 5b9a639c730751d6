use std::fmt;

use crate::ansi::{self, RESET};
use crate::debug::Escaped;
use crate::error::Result;
use crate::style::Style;

/// An SGR escape sequence, ready to be written to a terminal.
///
/// Its [`Display`](fmt::Display) writes the raw bytes. Its
/// [`Debug`](fmt::Debug) and [`escaped`](EscapeSequence::escaped) show the
/// escape character visibly instead.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EscapeSequence(String);

impl EscapeSequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A printable rendering for logs and documentation, e.g. `\x1b[92m`.
    /// Never write this to a terminal in place of the sequence itself.
    pub fn escaped(&self) -> Escaped<'_> {
        Escaped(&self.0)
    }
}

impl From<&Style> for EscapeSequence {
    fn from(style: &Style) -> Self {
        EscapeSequence(ansi::encode(style))
    }
}

impl AsRef<str> for EscapeSequence {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EscapeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A [`Style`] together with its escape sequence, computed once when the
/// `ColorCode` is built.
///
/// ```
/// use ansi_color_codes::{ColorCode, Style};
///
/// let bright_green = ColorCode::new(Style::bright_green());
/// println!("{}This text is green.{} This is not.", bright_green.code(), bright_green.reset_code());
/// assert_eq!(bright_green.escaped().to_string(), r"\x1b[92m");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ColorCode {
    style: Style,
    sequence: EscapeSequence,
}

impl ColorCode {
    pub fn new(style: Style) -> ColorCode {
        let sequence = EscapeSequence::from(&style);
        crate::logging::trace!(
            base = style.base(),
            underline = style.is_underline(),
            bold = style.is_bold(),
            "built color code"
        );
        ColorCode { style, sequence }
    }

    /// Validates plain integers and builds the code in one step.
    ///
    /// # Errors
    ///
    /// Same as [`Style::from_raw`].
    pub fn from_raw(
        color: u8,
        target: u8,
        intensity: u8,
        underline: bool,
        bold: bool,
    ) -> Result<ColorCode> {
        Style::from_raw(color, target, intensity, underline, bold).map(ColorCode::new)
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The escape sequence to write before styled text.
    pub fn code(&self) -> &str {
        self.sequence.as_str()
    }

    pub fn sequence(&self) -> &EscapeSequence {
        &self.sequence
    }

    /// See [`EscapeSequence::escaped`].
    pub fn escaped(&self) -> Escaped<'_> {
        self.sequence.escaped()
    }

    /// The sequence that undoes any `ColorCode`. Identical for all of them.
    pub fn reset_code(&self) -> &'static str {
        RESET
    }

    /// Wraps `text` so that it displays as this code, the text, then
    /// [`RESET`].
    pub fn paint<T: fmt::Display>(&self, text: T) -> Painted<'_, T> {
        Painted { code: self, text }
    }
}

impl From<Style> for ColorCode {
    fn from(style: Style) -> Self {
        ColorCode::new(style)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sequence, f)
    }
}

/// Text bracketed by a [`ColorCode`] and the reset sequence.
#[derive(Clone, Copy, Debug)]
pub struct Painted<'a, T> {
    code: &'a ColorCode,
    text: T,
}

impl<T: fmt::Display> fmt::Display for Painted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.code.code(), self.text, RESET)
    }
}
