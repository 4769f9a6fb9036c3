use std::path::Path;

use crate::error::{LdaError, Result};

use super::model::Matrix;
use super::parser::{parse_row, ParseError};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a matrix from a text file, one row per line.
///
/// Lines that are empty (or whitespace only) are skipped and do not produce
/// rows. Any other line must parse completely.
pub fn load_matrix(path: &Path) -> Result<Matrix> {
    let text = std::fs::read_to_string(path).map_err(|source| LdaError::Configuration {
        path: path.to_path_buf(),
        source,
    })?;

    let matrix = parse_matrix(&text).map_err(|(line, source)| LdaError::Parse {
        path: path.to_path_buf(),
        line,
        source,
    })?;

    log::debug!("Loaded {} rows from {}", matrix.len(), path.display());
    Ok(matrix)
}

/// Parse the text of a whole file. On failure returns the 1-based line number
/// with the row error.
pub fn parse_matrix(text: &str) -> std::result::Result<Matrix, (usize, ParseError)> {
    let mut matrix = Matrix::default();

    for (i, line) in text.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_row(line).map_err(|e| (i + 1, e))?;
        matrix.push(row);
    }

    Ok(matrix)
}
