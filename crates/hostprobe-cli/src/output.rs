use anyhow::Result;
use hostprobe_types::CheckResult;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::args::OutputFormat;

/// Print the single line the monitoring framework consumes.
pub fn print_result(result: &CheckResult, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => println!("{}", status_line(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string(result)?),
    }
    Ok(())
}

/// `<STATUS_WORD>: <message>`, with ` | <samples>` appended when
/// perfdata is attached.
pub fn status_line(result: &CheckResult) -> String {
    let mut line = format!("{}: {}", result.severity.status_word(), result.message);

    if !result.perfdata.is_empty() {
        let samples: Vec<String> = result.perfdata.iter().map(|s| s.render()).collect();
        line.push_str(" | ");
        line.push_str(&samples.join(" "));
    }

    line
}

/// Verbose diagnostics go to stderr so the framework-facing stdout line
/// stays machine-readable; color only when a human is watching.
pub fn verbose_line(text: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{}", text.bright_black());
    } else {
        eprintln!("{}", text);
    }
}
