//! Error types for userquery.
//!
//! Uses `thiserror` for ergonomic error definition. Queries themselves never
//! fail; errors arise only when building records from untrusted input.

use thiserror::Error;

/// Result type alias using the userquery [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for userquery operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        })
    }

    /// Creates an unknown privilege error.
    #[must_use]
    pub fn unknown_privilege(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownPrivilege(name.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// An argument violated a precondition and was rejected up front.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A privilege name did not match any known privilege.
    #[error("unknown privilege: {0}")]
    UnknownPrivilege(String),
}
