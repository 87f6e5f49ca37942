use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::record::{DeviceRecord, Drive};

/// `[expected/active]` member-count token on a recovery line
static MEMBER_COUNTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)/(\d+)\]").unwrap());

/// Raw line count below which a report describes no arrays at all.
pub(crate) const MIN_REPORT_LINES: usize = 5;

/// Parse a full mdstat report into per-device records.
///
/// `lines` is the complete report: the leading personalities header and
/// the two trailer lines are discarded here. Reports shorter than
/// [`MIN_REPORT_LINES`] parse to an empty record list. A device whose
/// recovery line carries no readable member-count token is dropped from
/// the result entirely: no error, no record, no alert.
pub fn parse_report<S: AsRef<str>>(lines: &[S]) -> Result<Vec<DeviceRecord>> {
    if lines.len() < MIN_REPORT_LINES {
        return Ok(Vec::new());
    }

    // Header line plus the two trailer lines never carry device state.
    let body = &lines[1..lines.len() - 2];

    // Each device is a status line, a recovery line and a blank
    // separator; the final separator went with the trailer, so a valid
    // body is one line short of a whole number of groups.
    if (body.len() + 1) % 3 != 0 {
        return Err(Error::MalformedReport(format!(
            "{} lines do not form 3-line device groups",
            body.len()
        )));
    }

    let mut records = Vec::new();
    for group in body.chunks(3) {
        let mut record = parse_status_line(group[0].as_ref())?;
        let Some((active, expected)) = member_counts(group[1].as_ref()) else {
            continue;
        };
        record.active = active;
        record.expected = expected;
        records.push(record);
    }

    Ok(records)
}

/// Tokenize a device status line:
/// `md0 : active raid5 sda1[0] sdb1[1] sdc1[2](F)`
fn parse_status_line(line: &str) -> Result<DeviceRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 5 {
        return Err(Error::MalformedReport(format!(
            "status line {:?} has {} fields, expected at least 5",
            line,
            fields.len()
        )));
    }

    let drives = fields[4..].iter().map(|token| parse_drive(token)).collect();

    Ok(DeviceRecord {
        name: fields[0].to_string(),
        status_word: fields[2].to_string(),
        raid_type: fields[3].to_string(),
        drives,
        active: 0,
        expected: 0,
    })
}

/// A drive token is `<id>[<slot>]` with an optional trailing `(F)`
/// failed marker. The identifier stops at the first `[`; a token the
/// kernel never emits (no bracket) is taken whole.
fn parse_drive(token: &str) -> Drive {
    let id = match token.split_once('[') {
        Some((prefix, _)) => prefix,
        None => token,
    };

    Drive {
        id: id.to_string(),
        failed: token.ends_with("(F)"),
    }
}

/// Extract `(active, expected)` from the last member-count token of a
/// recovery line. The kernel prints `[expected/active]`, expected first.
fn member_counts(line: &str) -> Option<(u32, u32)> {
    let caps = MEMBER_COUNTS.captures_iter(line).last()?;
    let expected = caps[1].parse().ok()?;
    let active = caps[2].parse().ok()?;
    Some((active, expected))
}
