use hostprobe_types::{CheckResult, Severity};

use crate::error::Result;
use crate::record::DeviceRecord;
use crate::report::{MIN_REPORT_LINES, parse_report};

/// Summary text when the report is too short to describe any array.
const NO_RAIDS: &str = "No s/w raids defined";

/// Classify an mdstat report into an aggregate health result.
///
/// Pure function over the materialized line sequence: the worst device
/// severity wins and every unhealthy device contributes one message
/// fragment, "; "-joined in report order. An all-healthy report yields
/// `Ok` with an empty message.
pub fn classify<S: AsRef<str>>(lines: &[S]) -> Result<CheckResult> {
    if lines.len() < MIN_REPORT_LINES {
        return Ok(CheckResult::ok(NO_RAIDS));
    }

    let mut severity = Severity::Ok;
    let mut fragments: Vec<String> = Vec::new();

    for record in parse_report(lines)? {
        let (device_severity, message) = device_health(&record);
        severity = severity.max(device_severity);
        if let Some(message) = message {
            fragments.push(message);
        }
    }

    Ok(CheckResult::new(severity, fragments.join("; ")))
}

/// Health of a single device under the per-type policy.
///
/// raid5 tolerates exactly one missing member, so it distinguishes
/// degraded (one short) from failed (more than one short); every other
/// type fails as soon as any member is missing. An inactive device is
/// critical before any counting happens.
fn device_health(record: &DeviceRecord) -> (Severity, Option<String>) {
    if record.status_word == "inactive" {
        return (
            Severity::Critical,
            Some(format!("{} is inactive.", record.name)),
        );
    }

    // The failed-drive suffix keeps its parentheses and trailing period
    // even when no drive carries the marker: "md0 failed ().".
    let failed = format!("({}).", record.failed_drives().join(", "));

    if record.raid_type == "raid5" {
        if record.active < record.expected.saturating_sub(1) {
            (
                Severity::Critical,
                Some(format!("{} failed {}", record.name, failed)),
            )
        } else if record.active < record.expected {
            (
                Severity::Warning,
                Some(format!("{} degraded {}", record.name, failed)),
            )
        } else {
            (Severity::Ok, None)
        }
    } else if record.active < record.expected {
        (
            Severity::Critical,
            Some(format!("{} failed {}", record.name, failed)),
        )
    } else {
        (Severity::Ok, None)
    }
}
