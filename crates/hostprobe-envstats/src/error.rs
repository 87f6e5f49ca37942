use std::fmt;

/// Result type for hostprobe-envstats operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while evaluating environment readings
#[derive(Debug)]
pub enum Error {
    /// A description or value table arrived with no entries
    EmptyTable,

    /// Description and value tables have different lengths
    TableMismatch { descriptions: usize, values: usize },

    /// A value table entry is not an integer
    BadValue(String),

    /// A threshold list entry is not an integer
    BadThreshold(String),

    /// A threshold list length does not match the reading count
    ThresholdMismatch {
        kind: &'static str,
        readings: usize,
        levels: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyTable => {
                write!(f, "description / value table empty or non-existent")
            }
            Error::TableMismatch {
                descriptions,
                values,
            } => write!(
                f,
                "{} descriptions paired with {} values",
                descriptions, values
            ),
            Error::BadValue(raw) => write!(f, "value {:?} is not an integer", raw),
            Error::BadThreshold(raw) => {
                write!(f, "threshold {:?} is not an integer", raw)
            }
            Error::ThresholdMismatch {
                kind,
                readings,
                levels,
            } => write!(
                f,
                "number of {} values ({}) not equal to number of table values ({})",
                kind, levels, readings
            ),
        }
    }
}

impl std::error::Error for Error {}
