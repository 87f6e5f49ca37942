use serde::{Deserialize, Serialize};
use std::fmt;

/// Probe outcome severity as the monitoring framework ranks it.
///
/// The derived ordering (`Ok < Warning < Critical`) is what aggregation
/// relies on: the overall state of a probe run is the maximum severity
/// across everything it inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

/// Status word printed when a probe could not produce a verdict at all.
///
/// UNKNOWN is deliberately not a `Severity` variant: it marks a failed
/// run, not an observed state, so max-aggregation can never produce it.
pub const UNKNOWN_WORD: &str = "UNKNOWN";

/// Exit code paired with [`UNKNOWN_WORD`].
pub const UNKNOWN_EXIT_CODE: i32 = 3;

impl Severity {
    /// Status word the framework greps for at the start of the summary line
    pub fn status_word(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Process exit code the framework maps back to a service state
    pub fn exit_code(&self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Ok
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status_word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_drives_aggregation() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
        assert_eq!(Severity::Warning.max(Severity::Critical), Severity::Critical);
        assert_eq!(Severity::Ok.max(Severity::Ok), Severity::Ok);
    }

    #[test]
    fn test_exit_codes_match_status_words() {
        assert_eq!(Severity::Ok.exit_code(), 0);
        assert_eq!(Severity::Warning.exit_code(), 1);
        assert_eq!(Severity::Critical.exit_code(), 2);
        assert_eq!(Severity::Critical.status_word(), "CRITICAL");
        assert_eq!(UNKNOWN_EXIT_CODE, 3);
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
