use std::path::PathBuf;

use thiserror::Error;

use crate::data::parser::ParseError;

/// Everything that can stop a run.
#[derive(Error, Debug)]
pub enum LdaError {
    /// A required input file is missing or unreadable.
    #[error("cannot read {}", .path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A numeric token in an input file could not be parsed.
    #[error("{}:{line}: invalid numeric row", .path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number in the source file.
        line: usize,
        #[source]
        source: ParseError,
    },

    /// Vector and matrix lengths do not line up.
    /// `sample` is `None` when the mismatch is found while checking the model.
    #[error("{}{operation}: expected {expected}, found {found}", sample_prefix(.sample))]
    DimensionMismatch {
        sample: Option<usize>,
        operation: String,
        expected: usize,
        found: usize,
    },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("QR encoding failed")]
    Qr(#[from] qrcode::types::QrError),

    #[error("PNG encoding failed")]
    Image(#[from] image::ImageError),
}

fn sample_prefix(sample: &Option<usize>) -> String {
    match sample {
        Some(i) => format!("sample {i}: "),
        None => String::new(),
    }
}

impl LdaError {
    pub(crate) fn mismatch(operation: impl Into<String>, expected: usize, found: usize) -> Self {
        LdaError::DimensionMismatch {
            sample: None,
            operation: operation.into(),
            expected,
            found,
        }
    }

    /// Attach a sample index to a dimension mismatch; other errors pass through.
    pub(crate) fn for_sample(self, index: usize) -> Self {
        match self {
            LdaError::DimensionMismatch {
                operation,
                expected,
                found,
                ..
            } => LdaError::DimensionMismatch {
                sample: Some(index),
                operation,
                expected,
                found,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, LdaError>;
