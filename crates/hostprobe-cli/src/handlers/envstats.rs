use anyhow::Result;
use hostprobe_envstats::{Thresholds, evaluate, parse_tables};
use hostprobe_types::Severity;
use std::path::PathBuf;

use crate::args::OutputFormat;
use crate::config::Config;
use crate::input::read_lines;
use crate::output::{print_result, verbose_line};

#[allow(clippy::too_many_arguments)]
pub fn handle(
    config: &Config,
    values: PathBuf,
    descriptions: Option<PathBuf>,
    warn: Option<String>,
    crit: Option<String>,
    perfdata: bool,
    format: &OutputFormat,
    verbose: bool,
) -> Result<Severity> {
    let value_lines = read_lines(&values)?;

    let readings = match descriptions {
        Some(path) => {
            let description_lines = read_lines(&path)?;
            parse_tables(&description_lines, &value_lines)?
        }
        None => {
            // Unlabeled tables still need stable identifiers for the
            // summary line and perfdata.
            let labels: Vec<String> = (1..=value_lines.len())
                .map(|n| format!("sensor{}", n))
                .collect();
            parse_tables(&labels, &value_lines)?
        }
    };

    let warn = warn.or_else(|| config.envstats.warn.clone());
    let crit = crit.or_else(|| config.envstats.crit.clone());
    let thresholds = match (warn, crit) {
        (Some(warn), Some(crit)) => Some(Thresholds::parse(&warn, &crit)?),
        _ => None,
    };

    if verbose {
        for (idx, reading) in readings.iter().enumerate() {
            match &thresholds {
                Some(thresholds)
                    if idx < thresholds.warn.len() && idx < thresholds.crit.len() =>
                {
                    verbose_line(&format!(
                        "{} = {} (warn at {}, crit at {})",
                        reading.label, reading.value, thresholds.warn[idx], thresholds.crit[idx]
                    ));
                }
                _ => verbose_line(&format!("{} = {}", reading.label, reading.value)),
            }
        }
    }

    let mut result = evaluate(&readings, thresholds.as_ref())?;
    if !(perfdata || config.envstats.perfdata) {
        result.perfdata.clear();
    }

    print_result(&result, format)?;
    Ok(result.severity)
}
