use std::fmt;

use itertools::Itertools;

use crate::style::{Modifiers, Style};

/// The escape character, code point 27.
pub const ESCAPE: char = '\x1B';

/// Control Sequence Introducer: escape followed by `[`.
pub const CSI: &str = "\x1B[";

/// Terminates an SGR parameter list.
pub const SGR_FINAL_BYTE: char = 'm';

/// Restores every rendition attribute to the terminal default.
pub const RESET: &str = "\x1B[0m";

/// Returns [`RESET`].
pub const fn reset_code() -> &'static str {
    RESET
}

/// Encodes `style` as an SGR escape sequence.
///
/// The parameter list is the style's [`base`](Style::base), then `4` if it
/// is underlined, then `1` if it is bold:
///
/// ```
/// use ansi_color_codes::{ansi, Style};
///
/// let style = Style::bright_green().with_bold().with_underline();
/// assert_eq!(ansi::encode(&style), "\x1B[92;4;1m");
/// ```
pub fn encode(style: &Style) -> String {
    let params = std::iter::once(style.base())
        .chain(
            Modifiers::SGR_PARAMS
                .into_iter()
                .filter(|(flag, _)| style.modifiers().contains(*flag))
                .map(|(_, param)| param),
        )
        .join(";");
    format!("{CSI}{params}{SGR_FINAL_BYTE}")
}

/// Writes [`RESET`] when displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reset;

impl fmt::Display for Reset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(RESET)
    }
}
