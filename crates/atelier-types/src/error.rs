use std::fmt;

/// Result type for catalog loading operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading the catalog document.
///
/// Every variant is terminal for the session: the kiosk renders an error
/// screen with a back action and does not retry automatically.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed (local file source)
    Io(std::io::Error),
    /// Transport-level failure (connection refused, TLS, DNS)
    Fetch(String),
    /// Server answered with a non-success HTTP status
    Status(u16),
    /// Document did not parse as a catalog
    Parse(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Fetch(msg) => write!(f, "Fetch error: {}", msg),
            Error::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            Error::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}
