use hostprobe_types::{CheckResult, PerfSample, Severity};

use crate::error::{Error, Result};
use crate::table::Reading;

/// Warning and critical trigger levels, one per reading, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    pub warn: Vec<i64>,
    pub crit: Vec<i64>,
}

impl Thresholds {
    /// Parse a `-w`/`-c` style pair of comma-separated integer lists.
    pub fn parse(warn: &str, crit: &str) -> Result<Self> {
        Ok(Self {
            warn: parse_list(warn)?,
            crit: parse_list(crit)?,
        })
    }

    fn check_lengths(&self, readings: usize) -> Result<()> {
        if self.crit.len() != readings {
            return Err(Error::ThresholdMismatch {
                kind: "critical",
                readings,
                levels: self.crit.len(),
            });
        }
        if self.warn.len() != readings {
            return Err(Error::ThresholdMismatch {
                kind: "warning",
                readings,
                levels: self.warn.len(),
            });
        }
        Ok(())
    }
}

fn parse_list(spec: &str) -> Result<Vec<i64>> {
    spec.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse()
                .map_err(|_| Error::BadThreshold(item.to_string()))
        })
        .collect()
}

/// Evaluate readings against optional thresholds.
///
/// Every reading contributes a fragment to the message (healthy hardware
/// is listed too, unlike the RAID summary): at or above its critical
/// level the fragment is `label: value (C=level)` and the run is
/// Critical; at or above its warning level, `label: value (W=level)` and
/// Warning. Without thresholds the result just lists the readings.
/// Perfdata carries one sample per reading either way; the caller
/// decides whether to print it.
pub fn evaluate(readings: &[Reading], thresholds: Option<&Thresholds>) -> Result<CheckResult> {
    if let Some(thresholds) = thresholds {
        thresholds.check_lengths(readings.len())?;
    }

    let mut severity = Severity::Ok;
    let mut fragments = Vec::with_capacity(readings.len());
    let mut perfdata = Vec::with_capacity(readings.len());

    for (idx, reading) in readings.iter().enumerate() {
        let fragment = match thresholds {
            Some(thresholds) => {
                let warn = thresholds.warn[idx];
                let crit = thresholds.crit[idx];
                if reading.value >= crit {
                    severity = Severity::Critical;
                    format!("{}: {} (C={})", reading.label, reading.value, crit)
                } else if reading.value >= warn {
                    severity = severity.max(Severity::Warning);
                    format!("{}: {} (W={})", reading.label, reading.value, warn)
                } else {
                    format!("{}: {}", reading.label, reading.value)
                }
            }
            None => format!("{}: {}", reading.label, reading.value),
        };

        fragments.push(fragment);
        perfdata.push(PerfSample::new(reading.label.clone(), reading.value));
    }

    Ok(CheckResult::new(severity, fragments.join(", ")).with_perfdata(perfdata))
}
