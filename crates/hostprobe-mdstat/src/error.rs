use std::fmt;

/// Result type for hostprobe-mdstat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading an mdstat report
#[derive(Debug)]
pub enum Error {
    /// Report structure does not match the expected mdstat layout
    /// (wrong group count, status line with too few fields)
    MalformedReport(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedReport(msg) => write!(f, "malformed mdstat report: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MalformedReport(_) => None,
        }
    }
}
