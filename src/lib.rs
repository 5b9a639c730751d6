//! This is a library for generating the ANSI escape sequences that color and
//! style text, such as bright green bold text or a blue underlined
//! background, on ANSI terminals.
//!
//! ## What is this crate useful for?
//!
//! Producing the exact escape sequence for one of the eight standard colors,
//! in the foreground or background, at normal or bright intensity, optionally
//! underlined and/or bold. It does not detect terminal capabilities, write
//! to the terminal, or support 256-color and RGB modes.
//!
//! ## Basic usage
//!
//! There are a few basic types: [`Style`], [`ColorCode`] and
//! [`EscapeSequence`].
//!
//! A [`Style`] holds the stylistic information: a [`Color`], a [`Target`]
//! (foreground or background), an [`Intensity`] (normal or bright), and
//! whether the text is underlined or bold. A [`ColorCode`] pairs a `Style`
//! with its [`EscapeSequence`], which is computed once, when the
//! `ColorCode` is created.
//!
//! ```
//! use ansi_color_codes::{Color, ColorCode, Intensity, Style, Target};
//!
//! let bright_green = ColorCode::new(Style::new(Color::Green, Target::Foreground, Intensity::Bright));
//!
//! println!(
//!     "{}This text is green.{} And this text has been reset.",
//!     bright_green.code(),
//!     bright_green.reset_code(),
//! );
//! assert_eq!(bright_green.code(), "\x1B[92m");
//! ```
//!
//! Every color has shorthand constructors for the four target/intensity
//! combinations, and modifiers are added by chaining:
//!
//! ```
//! use ansi_color_codes::{ColorCode, Style};
//!
//! assert_eq!(ColorCode::new(Style::red()).code(), "\x1B[31m");
//! assert_eq!(ColorCode::new(Style::on_bright_blue().with_bold()).code(), "\x1B[104;1m");
//! // Underline always comes before bold.
//! assert_eq!(
//!     ColorCode::new(Style::bright_green().with_bold().with_underline()).code(),
//!     "\x1B[92;4;1m",
//! );
//! ```
//!
//! ## Plain integers
//!
//! Styles can also be built from the raw SGR contributions. Values outside
//! their domain are rejected rather than clamped:
//!
//! ```
//! use ansi_color_codes::{ColorCode, Error};
//!
//! let code = ColorCode::from_raw(2, 0, 90, true, false).unwrap();
//! assert_eq!(code.code(), "\x1B[92;4m");
//!
//! assert!(matches!(ColorCode::from_raw(8, 0, 90, false, false), Err(Error::InvalidParameter { .. })));
//! ```
//!
//! ## Inspecting sequences
//!
//! The escape character is invisible once printed. Use
//! [`ColorCode::escaped`] to see what a sequence contains:
//!
//! ```
//! use ansi_color_codes::{ColorCode, Style};
//!
//! let code = ColorCode::new(Style::bright_green().with_bold());
//! assert_eq!(code.escaped().to_string(), r"\x1b[92;1m");
//! ```

#![crate_name = "ansi_color_codes"]
#![crate_type = "rlib"]
#![warn(missing_copy_implementations)]
#![warn(trivial_casts, trivial_numeric_casts)]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Encoding of a [`Style`] into an SGR escape sequence, and the reset
/// sequence.
pub mod ansi;
pub use ansi::{reset_code, Reset, RESET};

mod style;
pub use style::{Color, Intensity, Modifiers, Style, Target};

mod code;
pub use code::{ColorCode, EscapeSequence, Painted};

/// Helpers for displaying escape sequences legibly.
mod debug;
pub use debug::Escaped;

mod error;
pub use error::{Error, Parameter, Result};

mod logging;
