use anyhow::Result;
use hostprobe_mdstat::{classify, parse_report};
use hostprobe_types::Severity;
use std::path::PathBuf;

use crate::args::OutputFormat;
use crate::config::Config;
use crate::input::read_lines;
use crate::output::{print_result, verbose_line};

/// Summary text when every array is healthy. `classify` reports an
/// empty message in that case; the printed contract has always carried
/// this line instead.
const ALL_OK: &str = "All md devices Ok.";

pub fn handle(
    config: &Config,
    file: Option<PathBuf>,
    format: &OutputFormat,
    verbose: bool,
) -> Result<Severity> {
    let path = file
        .or_else(|| config.mdstat.file.clone())
        .unwrap_or_else(|| PathBuf::from("/proc/mdstat"));

    let lines = read_lines(&path)?;

    if verbose {
        for record in parse_report(&lines)? {
            let drives: Vec<String> = record
                .drives
                .iter()
                .map(|drive| {
                    if drive.failed {
                        format!("{}(F)", drive.id)
                    } else {
                        drive.id.clone()
                    }
                })
                .collect();
            verbose_line(&format!(
                "{}: {} {} members {}/{} [{}]",
                record.name,
                record.status_word,
                record.raid_type,
                record.active,
                record.expected,
                drives.join(", ")
            ));
        }
    }

    let mut result = classify(&lines)?;
    if result.message.is_empty() {
        result.message = ALL_OK.to_string();
    }

    print_result(&result, format)?;
    Ok(result.severity)
}
