use crate::error::{Error, Result};

/// One polled sensor reading: a label paired with its integer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub label: String,
    pub value: i64,
}

/// Pair a description table with a value table, line by line.
///
/// Tables arrive as the raw dump of whatever polled the hardware, one
/// entry per line; surrounding double quotes are stripped the way the
/// polling utilities quote their output. Both tables must be non-empty
/// and the same length.
pub fn parse_tables<S: AsRef<str>, V: AsRef<str>>(
    descriptions: &[S],
    values: &[V],
) -> Result<Vec<Reading>> {
    if descriptions.is_empty() || values.is_empty() {
        return Err(Error::EmptyTable);
    }
    if descriptions.len() != values.len() {
        return Err(Error::TableMismatch {
            descriptions: descriptions.len(),
            values: values.len(),
        });
    }

    descriptions
        .iter()
        .zip(values)
        .map(|(description, value)| {
            let label = unquote(description.as_ref()).to_string();
            let raw = unquote(value.as_ref());
            let value = raw
                .parse()
                .map_err(|_| Error::BadValue(raw.to_string()))?;
            Ok(Reading { label, value })
        })
        .collect()
}

fn unquote(entry: &str) -> &str {
    entry.trim().trim_matches('"')
}
