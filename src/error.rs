//! Error types for slidekit.

use std::fmt;

/// Result type alias for slidekit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for configuration handling.
///
/// Runtime carousel operations never fail; out-of-range and re-entrant
/// requests degrade to no-ops. Only building a configuration can be rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Autoplay delay must be strictly positive.
    InvalidDelay,
    /// A host attribute carried a value that could not be parsed.
    InvalidAttribute { name: String, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDelay => write!(f, "autoplay delay must be greater than zero"),
            Self::InvalidAttribute { name, value } => {
                write!(f, "invalid value for attribute {name}: {value:?}")
            }
        }
    }
}

impl std::error::Error for Error {}
