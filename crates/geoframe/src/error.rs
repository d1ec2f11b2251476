//! Error types for datum configuration.
//!
//! The numeric core never fails: non-finite inputs propagate as NaN/∞. Errors
//! only arise while building an [`Ellipsoid`](crate::Ellipsoid) from
//! parameters or text.

use std::fmt;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a datum.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No catalogue entry matches the requested name.
    UnknownEllipsoid {
        /// The name that was looked up.
        name: String,
    },
    /// An ellipsoid parameter is out of its physical range.
    InvalidEllipsoid {
        /// Which parameter was rejected.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Text could not be parsed.
    InvalidFormat {
        /// Context for where the error occurred.
        context: &'static str,
        /// Description of what was invalid.
        detail: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownEllipsoid { name } => write!(f, "unknown ellipsoid '{name}'"),
            Error::InvalidEllipsoid { parameter, value } => {
                write!(f, "invalid ellipsoid {parameter}: {value}")
            }
            Error::InvalidFormat { context, detail } => {
                write!(f, "invalid format in {context}: {detail}")
            }
        }
    }
}

impl std::error::Error for Error {}
