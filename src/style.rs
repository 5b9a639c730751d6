use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Parameter, Result};

/// One of the eight standard ANSI colors. The discriminant is the color's
/// offset within an SGR color range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "derive_serde_style",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

/// Whether a [`Color`] applies to the text itself or to the cell behind it.
///
/// Background codes sit 10 above their foreground counterparts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "derive_serde_style",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Target {
    Foreground = 0,
    Background = 10,
}

/// Normal colors start at 30, bright ("high intensity") colors at 90.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "derive_serde_style",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Intensity {
    Normal = 30,
    Bright = 90,
}

/// Implements the value/name conversions shared by the three closed domains.
macro_rules! closed_domain {
    (
        $ty:ident, $param:ident, $expected:literal,
        [$($variant:ident => $name:literal),+ $(,)?]
    ) => {
        impl $ty {
            /// Every variant, in ascending numeric order.
            pub const ALL: [$ty; [$(stringify!($variant)),+].len()] = [$($ty::$variant),+];

            /// The numeric SGR contribution of this value.
            pub const fn value(self) -> u8 {
                self as u8
            }

            /// The lower-case name, as accepted by [`FromStr`].
            pub const fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = Error;

            fn try_from(value: u8) -> Result<Self> {
                $ty::ALL
                    .into_iter()
                    .find(|candidate| candidate.value() == value)
                    .ok_or_else(|| Error::invalid_value(Parameter::$param, value, $expected))
            }
        }

        impl From<$ty> for u8 {
            fn from(value: $ty) -> u8 {
                value.value()
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                $ty::ALL
                    .into_iter()
                    .find(|candidate| candidate.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| Error::invalid_name(Parameter::$param, s, $expected))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

closed_domain!(Color, Color, "0..=7 (black, red, green, yellow, blue, magenta, cyan, white)", [
    Black => "black",
    Red => "red",
    Green => "green",
    Yellow => "yellow",
    Blue => "blue",
    Magenta => "magenta",
    Cyan => "cyan",
    White => "white",
]);

closed_domain!(Target, Target, "0 (foreground) or 10 (background)", [
    Foreground => "foreground",
    Background => "background",
]);

closed_domain!(Intensity, Intensity, "30 (normal) or 90 (bright)", [
    Normal => "normal",
    Bright => "bright",
]);

bitflags::bitflags! {
    /// Rendition flags appended after the color parameter.
    ///
    /// Encoding order is fixed (underline, then bold) and does not follow
    /// bit order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const UNDERLINE = 1 << 0;
        const BOLD = 1 << 1;
    }
}

impl Modifiers {
    /// SGR parameter for each modifier, in emission order.
    pub(crate) const SGR_PARAMS: [(Modifiers, u8); 2] =
        [(Modifiers::UNDERLINE, 4), (Modifiers::BOLD, 1)];
}

/// A complete, validated style: one color, where it applies, how bright it
/// is, and whether the text is underlined and/or bold.
///
/// A `Style` cannot hold out-of-range values. The typed constructors are
/// infallible and [`Style::from_raw`] rejects bad integers instead of
/// clamping them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "derive_serde_style",
    derive(serde::Deserialize, serde::Serialize),
    serde(from = "serde_repr::StyleDef", into = "serde_repr::StyleDef")
)]
pub struct Style {
    color: Color,
    target: Target,
    intensity: Intensity,
    modifiers: Modifiers,
}

impl Style {
    /// A style with no modifiers.
    pub const fn new(color: Color, target: Target, intensity: Intensity) -> Style {
        Style {
            color,
            target,
            intensity,
            modifiers: Modifiers::empty(),
        }
    }

    /// Builds a style from plain integers, e.g. `from_raw(2, 0, 90, false,
    /// true)` for bright bold green text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `color` is not in `0..=7`,
    /// `target` is not `0` or `10`, or `intensity` is not `30` or `90`.
    pub fn from_raw(
        color: u8,
        target: u8,
        intensity: u8,
        underline: bool,
        bold: bool,
    ) -> Result<Style> {
        let style = Style::new(
            Color::try_from(color)?,
            Target::try_from(target)?,
            Intensity::try_from(intensity)?,
        );
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::UNDERLINE, underline);
        modifiers.set(Modifiers::BOLD, bold);
        Ok(style.with_modifiers(modifiers))
    }

    /// Returns a copy of this style that is also underlined.
    pub const fn with_underline(self) -> Style {
        self.with_modifiers(Modifiers::UNDERLINE)
    }

    /// Returns a copy of this style that is also bold.
    pub const fn with_bold(self) -> Style {
        self.with_modifiers(Modifiers::BOLD)
    }

    /// Returns a copy of this style with `modifiers` added to its own.
    pub const fn with_modifiers(self, modifiers: Modifiers) -> Style {
        Style {
            modifiers: self.modifiers.union(modifiers),
            ..self
        }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn target(&self) -> Target {
        self.target
    }

    pub const fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub const fn is_underline(&self) -> bool {
        self.modifiers.contains(Modifiers::UNDERLINE)
    }

    pub const fn is_bold(&self) -> bool {
        self.modifiers.contains(Modifiers::BOLD)
    }

    /// The leading SGR parameter: `color + target + intensity`.
    ///
    /// Always one of 30–37, 40–47, 90–97 or 100–107.
    pub const fn base(&self) -> u8 {
        self.color.value() + self.target.value() + self.intensity.value()
    }
}

/// Generates the four target/intensity shorthands for each color.
macro_rules! color_shorthands {
    ($($color:ident => $name:ident),+ $(,)?) => {
        paste::paste! {
            impl Style {
                $(
                    #[doc = "Normal " $name " text."]
                    pub const fn $name() -> Style {
                        Style::new(Color::$color, Target::Foreground, Intensity::Normal)
                    }

                    #[doc = "Bright " $name " text."]
                    pub const fn [<bright_ $name>]() -> Style {
                        Style::new(Color::$color, Target::Foreground, Intensity::Bright)
                    }

                    #[doc = "Normal " $name " background."]
                    pub const fn [<on_ $name>]() -> Style {
                        Style::new(Color::$color, Target::Background, Intensity::Normal)
                    }

                    #[doc = "Bright " $name " background."]
                    pub const fn [<on_bright_ $name>]() -> Style {
                        Style::new(Color::$color, Target::Background, Intensity::Bright)
                    }
                )+
            }
        }
    };
}

color_shorthands! {
    Black => black,
    Red => red,
    Green => green,
    Yellow => yellow,
    Blue => blue,
    Magenta => magenta,
    Cyan => cyan,
    White => white,
}

#[cfg(feature = "derive_serde_style")]
mod serde_repr {
    use super::{Color, Intensity, Modifiers, Style, Target};

    /// Flat on-disk form of a [`Style`], with the modifiers as plain booleans.
    #[derive(serde::Deserialize, serde::Serialize)]
    pub(super) struct StyleDef {
        color: Color,
        target: Target,
        intensity: Intensity,
        #[serde(default)]
        underline: bool,
        #[serde(default)]
        bold: bool,
    }

    impl From<StyleDef> for Style {
        fn from(def: StyleDef) -> Style {
            let mut modifiers = Modifiers::empty();
            modifiers.set(Modifiers::UNDERLINE, def.underline);
            modifiers.set(Modifiers::BOLD, def.bold);
            Style::new(def.color, def.target, def.intensity).with_modifiers(modifiers)
        }
    }

    impl From<Style> for StyleDef {
        fn from(style: Style) -> StyleDef {
            StyleDef {
                color: style.color,
                target: style.target,
                intensity: style.intensity,
                underline: style.is_underline(),
                bold: style.is_bold(),
            }
        }
    }
}
