use std::fmt;

/// Which style parameter was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    Color,
    Target,
    Intensity,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Parameter::Color => "color",
            Parameter::Target => "target",
            Parameter::Intensity => "intensity",
        })
    }
}

/// Errors that can occur while building a [`Style`](crate::Style).
///
/// Only construction can fail. Once a style exists, encoding it cannot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid {parameter} {}: expected {expected}", display_value(.value, .name))]
    InvalidParameter {
        parameter: Parameter,
        /// The rejected integer, when the input was numeric.
        value: Option<u8>,
        /// The rejected name, when the input was textual.
        name: Option<String>,
        expected: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid_value(parameter: Parameter, value: u8, expected: &'static str) -> Self {
        crate::logging::debug!(%parameter, value, "rejected style parameter");
        Error::InvalidParameter {
            parameter,
            value: Some(value),
            name: None,
            expected,
        }
    }

    pub(crate) fn invalid_name(parameter: Parameter, name: &str, expected: &'static str) -> Self {
        crate::logging::debug!(%parameter, name, "rejected style parameter name");
        Error::InvalidParameter {
            parameter,
            value: None,
            name: Some(name.to_owned()),
            expected,
        }
    }

    /// The parameter that failed validation.
    pub fn parameter(&self) -> Parameter {
        match self {
            Error::InvalidParameter { parameter, .. } => *parameter,
        }
    }
}

fn display_value(value: &Option<u8>, name: &Option<String>) -> String {
    match (value, name) {
        (Some(value), _) => value.to_string(),
        (None, Some(name)) => format!("{name:?}"),
        (None, None) => String::from("value"),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
