use std::fmt;
use thiserror::Error;

/// Failure reported by a resolver for a single attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// An authoritative source states the name or record does not exist.
    #[error("Authoritative negative answer: {0}")]
    AuthoritativeNegative(String),

    /// The resolver holds no data for the name but is not authoritative for it.
    #[error("Name not found: {0}")]
    NameNotFound(String),

    #[error("Query timeout: {0}")]
    Timeout(String),

    /// The resolver does not implement this kind of query.
    #[error("Unsupported query: {0}")]
    Unsupported(String),

    #[error("Server failure: {0}")]
    ServerFailure(String),

    #[error("Query refused: {0}")]
    Refused(String),

    #[error("Malformed query or response: {0}")]
    FormatError(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("{0}")]
    Other(String),
}

/// Closed set of failure kinds, one per [`ResolveError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    AuthoritativeNegative,
    NameNotFound,
    Timeout,
    Unsupported,
    ServerFailure,
    Refused,
    FormatError,
    Io,
    Other,
}

impl ResolveError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ResolveError::AuthoritativeNegative(_) => FailureKind::AuthoritativeNegative,
            ResolveError::NameNotFound(_) => FailureKind::NameNotFound,
            ResolveError::Timeout(_) => FailureKind::Timeout,
            ResolveError::Unsupported(_) => FailureKind::Unsupported,
            ResolveError::ServerFailure(_) => FailureKind::ServerFailure,
            ResolveError::Refused(_) => FailureKind::Refused,
            ResolveError::FormatError(_) => FailureKind::FormatError,
            ResolveError::Io(_) => FailureKind::Io,
            ResolveError::Other(_) => FailureKind::Other,
        }
    }
}

impl From<std::io::Error> for ResolveError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::TimedOut => ResolveError::Timeout(err.to_string()),
            _ => ResolveError::Io(err.to_string()),
        }
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::AuthoritativeNegative => "authoritative_negative",
            FailureKind::NameNotFound => "name_not_found",
            FailureKind::Timeout => "timeout",
            FailureKind::Unsupported => "unsupported",
            FailureKind::ServerFailure => "server_failure",
            FailureKind::Refused => "refused",
            FailureKind::FormatError => "format_error",
            FailureKind::Io => "io",
            FailureKind::Other => "other",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainConstructionError {
    #[error("Resolver chain requires at least one resolver")]
    Empty,
}
