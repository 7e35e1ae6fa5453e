//! IRI error.

use core::fmt;

#[cfg(feature = "std")]
use std::error;

/// Kind of an IRI error.
///
/// There is one kind per failure site: one per component setter, one for whole-string
/// parsing, and one for the base of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The scheme does not match `scheme` rule.
    InvalidScheme,
    /// The userinfo does not match `iuserinfo` rule.
    InvalidUserinfo,
    /// The host is neither a registered name nor a bracketed literal.
    InvalidHost,
    /// The port is not a decimal number in `0..=65535`.
    InvalidPort,
    /// The path contains characters other than `ipchar` and `/`.
    InvalidPath,
    /// The query does not match `iquery` rule.
    InvalidQuery,
    /// The fragment does not match `ifragment` rule.
    InvalidFragment,
    /// The string is not an IRI reference.
    InvalidIri,
    /// The base IRI of a resolution has no scheme.
    InvalidBase,
}

impl ErrorKind {
    /// Returns the description of the error kind.
    #[must_use]
    fn description(self) -> &'static str {
        match self {
            Self::InvalidScheme => "invalid scheme",
            Self::InvalidUserinfo => "invalid userinfo",
            Self::InvalidHost => "invalid host",
            Self::InvalidPort => "invalid port",
            Self::InvalidPath => "invalid path",
            Self::InvalidQuery => "invalid query",
            Self::InvalidFragment => "invalid fragment",
            Self::InvalidIri => "invalid IRI",
            Self::InvalidBase => "base IRI cannot be relative",
        }
    }
}

/// IRI error.
// Note that this type should implement `Copy` trait.
// To return additional non-`Copy` data as an error, use wrapper type
// (as `std::string::FromUtf8Error` contains `std::str::Utf8Error`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error {
    /// Error kind.
    kind: ErrorKind,
}

impl Error {
    /// Creates a new `Error`.
    ///
    /// For internal use.
    #[inline]
    #[must_use]
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the error kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.description())
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}
