use std::num::ParseFloatError;

use thiserror::Error;

use super::model::NumericRow;

/// A field of a row that is not a number.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("field {column}: '{token}' is not a number")]
pub struct ParseError {
    /// 1-based field position.
    pub column: usize,
    pub token: String,
    #[source]
    pub source: ParseFloatError,
}

/// Parse one line into floats.
///
/// The line is split on commas when it contains one, otherwise on runs of
/// whitespace. Fields are trimmed and parsed as `f64` (`0.5`, `1.59E-01`).
/// The first bad field fails the whole row.
pub fn parse_row(line: &str) -> Result<NumericRow, ParseError> {
    if line.contains(',') {
        parse_fields(comma_fields(line))
    } else {
        parse_fields(line.split_whitespace().map(str::to_string).collect())
    }
}

fn parse_fields(fields: Vec<String>) -> Result<NumericRow, ParseError> {
    fields
        .into_iter()
        .enumerate()
        .map(|(j, tok)| {
            tok.parse::<f64>().map_err(|source| ParseError {
                column: j + 1,
                token: tok,
                source,
            })
        })
        .collect()
}

/// Split a comma-delimited line with the csv reader (one record, no header).
fn comma_fields(line: &str) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(str::to_string).collect(),
        // An unreadable record falls back to a plain split so the parse step
        // can report the offending field.
        _ => line.split(',').map(|s| s.trim().to_string()).collect(),
    }
}
