//! Error types for podium.

use std::fmt;

/// The main error type for podium operations.
#[derive(Debug)]
pub enum Error {
    /// A country lookup found no matching row
    NotFound(String),

    /// An operation requiring at least one row ran on an empty table
    EmptyTable,

    /// A rank index was outside `[0, len)`
    IndexOutOfRange {
        /// The requested rank
        index: usize,
        /// The number of rows in the table
        len: usize,
    },

    /// A query argument violated its contract
    InvalidArgument(String),

    /// A row violated a schema invariant at construction time
    Schema(String),

    /// I/O error
    Io(std::io::Error),

    /// CSV parse or deserialization error
    Csv(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(country) => write!(f, "Country not found: {}", country),
            Error::EmptyTable => write!(f, "Table has no rows"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Rank {} out of range for table with {} rows", index, len)
            }
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Schema(msg) => write!(f, "Schema violation: {}", msg),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Csv(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// A specialized `Result` type for podium operations.
pub type Result<T> = std::result::Result<T, Error>;
