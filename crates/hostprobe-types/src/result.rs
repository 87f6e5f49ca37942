use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// Single performance-data sample a probe attaches to its summary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfSample {
    pub label: String,
    pub value: i64,
}

impl PerfSample {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Render as `label=value`. Labels flatten spaces to underscores so
    /// the sample stays a single token on the status line.
    pub fn render(&self) -> String {
        format!("{}={}", self.label.replace(' ', "_"), self.value)
    }
}

/// Outcome of one probe run: the worst severity observed plus the
/// summary text describing how it was reached.
///
/// An empty message means "nothing worth reporting"; the caller decides
/// what all-clear text to print in its place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckResult {
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub perfdata: Vec<PerfSample>,
}

impl CheckResult {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            perfdata: Vec::new(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Severity::Ok, message)
    }

    pub fn with_perfdata(mut self, perfdata: Vec<PerfSample>) -> Self {
        self.perfdata = perfdata;
        self
    }
}
