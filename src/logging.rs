//! Crate-internal logging macros.
//!
//! With the `tracing` feature these forward to the `tracing` macros of the
//! same name. Without it they expand to nothing. Statement position only.

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

pub(crate) use debug;
pub(crate) use trace;
