use std::fmt::{self, Write};

use crate::ansi::ESCAPE;
use crate::code::{ColorCode, EscapeSequence};
use crate::style::{Intensity, Style, Target};

/// Displays a string with the escape character spelled out as `\x1b`.
/// Other control characters use [`char::escape_debug`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Escaped<'a>(pub(crate) &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            if c == ESCAPE {
                f.write_str(r"\x1b")?;
            } else {
                for escaped in c.escape_debug() {
                    f.write_char(escaped)?;
                }
            }
        }
        Ok(())
    }
}

/// Compact form lists only what is set, e.g. `Style { on bright blue, bold }`.
/// The alternate form (`{:#?}`) shows every field.
impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f
                .debug_struct("Style")
                .field("color", &self.color())
                .field("target", &self.target())
                .field("intensity", &self.intensity())
                .field("underline", &self.is_underline())
                .field("bold", &self.is_bold())
                .finish();
        }

        f.write_str("Style { ")?;
        if self.target() == Target::Background {
            f.write_str("on ")?;
        }
        if self.intensity() == Intensity::Bright {
            f.write_str("bright ")?;
        }
        write!(f, "{}", self.color())?;
        if self.is_underline() {
            f.write_str(", underline")?;
        }
        if self.is_bold() {
            f.write_str(", bold")?;
        }
        f.write_str(" }")
    }
}

impl fmt::Debug for EscapeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.escaped())
    }
}

impl fmt::Debug for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorCode")
            .field("style", self.style())
            .field("sequence", self.sequence())
            .finish()
    }
}
