use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Materialize an input source into lines, `-` meaning standard input.
///
/// Probes classify a fully-read report; nothing is interpreted while the
/// source is still being consumed, so a truncated read surfaces here
/// instead of as a half-parsed result.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading standard input")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?
    };

    Ok(content.lines().map(str::to_string).collect())
}
