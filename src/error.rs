use std::borrow::Cow;
use std::fmt::{self, Display};

/// Error types used throughout the `xcb_wrangler` library.
/// These errors represent the failure conditions that can occur while
/// locating a shared library and resolving its entry points at runtime.
#[derive(Debug)]
pub enum Error {
    /// The shared library could not be located or opened.
    ///
    /// On hosts without the wrapped library installed this is an expected,
    /// common outcome. It is reported through the result channel and turned
    /// into a [`LibraryStatus`](crate::LibraryStatus); it never aborts the
    /// process.
    Open {
        /// Library family name (for example `"xcb"` or `"xcb-shm"`).
        lib: &'static str,
        /// The platform loader's diagnostic text.
        msg: Cow<'static, str>,
    },

    /// A required entry point was missing from an opened library.
    ///
    /// This typically indicates an installed library older than the set of
    /// declarations compiled into this crate.
    Symbol {
        /// Library family name the entry point belongs to.
        lib: &'static str,
        /// Canonical exported name that failed to resolve.
        symbol: &'static str,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open { lib, msg } => write!(f, "cannot open {lib}: {msg}"),
            Error::Symbol { lib, symbol } => {
                write!(f, "{lib} is missing required entry point {symbol}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Creates an open error with the specified message.
///
/// This is a convenience function for creating `Error::Open` variants.
#[cold]
#[inline(never)]
pub(crate) fn open_error(lib: &'static str, msg: impl Into<Cow<'static, str>>) -> Error {
    Error::Open {
        lib,
        msg: msg.into(),
    }
}

/// Creates a missing-symbol error for a required entry point.
///
/// This is a convenience function for creating `Error::Symbol` variants.
#[cold]
#[inline(never)]
pub(crate) fn symbol_error(lib: &'static str, symbol: &'static str) -> Error {
    Error::Symbol { lib, symbol }
}
