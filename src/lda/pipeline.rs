use crate::data::model::Matrix;
use crate::error::{LdaError, Result};

use super::format::format_vector;
use super::ops::{delta, normalize, project};

// ---------------------------------------------------------------------------
// Model summary
// ---------------------------------------------------------------------------

/// Shapes of the loaded inputs, for the verbose configuration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub samples: usize,
    /// Length of the first sample row (before truncation).
    pub sample_width: usize,
    pub components: usize,
    pub means: usize,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Sample projection: truncate → normalize → center → project → format.
///
/// Borrows the loaded matrices; nothing is mutated while samples run.
#[derive(Debug)]
pub struct Pipeline<'a> {
    samples: &'a Matrix,
    scalings: &'a Matrix,
    means: &'a Matrix,
    freqs: usize,
    precision: i32,
}

impl<'a> Pipeline<'a> {
    /// Check the input shapes once and build the pipeline.
    ///
    /// Every sample must have at least `freqs` values, every scaling row
    /// exactly `freqs`, and the first `freqs` means rows at least one.
    pub fn new(
        samples: &'a Matrix,
        scalings: &'a Matrix,
        means: &'a Matrix,
        freqs: usize,
        precision: i32,
    ) -> Result<Self> {
        for (i, row) in samples.iter().enumerate() {
            if row.len() < freqs {
                return Err(LdaError::DimensionMismatch {
                    sample: Some(i),
                    operation: "sample length".to_string(),
                    expected: freqs,
                    found: row.len(),
                });
            }
        }

        for (k, row) in scalings.iter().enumerate() {
            if row.len() != freqs {
                return Err(LdaError::mismatch(
                    format!("scaling row {k} length"),
                    freqs,
                    row.len(),
                ));
            }
        }

        if means.len() < freqs {
            return Err(LdaError::mismatch("xbar row count", freqs, means.len()));
        }
        if let Some(i) = means.iter().take(freqs).position(|row| row.is_empty()) {
            return Err(LdaError::mismatch(format!("xbar row {i} length"), 1, 0));
        }

        Ok(Pipeline {
            samples,
            scalings,
            means,
            freqs,
            precision,
        })
    }

    pub fn summary(&self) -> Summary {
        Summary {
            samples: self.samples.len(),
            sample_width: self.samples.width(),
            components: self.scalings.len(),
            means: self.means.len(),
        }
    }

    /// Projected (unformatted) values of sample `index`.
    pub fn project_sample(&self, index: usize) -> Result<Vec<f64>> {
        let row = self.samples.row(index).ok_or_else(|| LdaError::DimensionMismatch {
            sample: Some(index),
            operation: "sample index".to_string(),
            expected: self.samples.len(),
            found: index,
        })?;
        let truncated = row.get(..self.freqs).ok_or_else(|| LdaError::DimensionMismatch {
            sample: Some(index),
            operation: "sample length".to_string(),
            expected: self.freqs,
            found: row.len(),
        })?;

        let normalized = normalize(truncated);
        let centered = delta(&normalized, self.means).map_err(|e| e.for_sample(index))?;
        project(&centered, self.scalings).map_err(|e| e.for_sample(index))
    }

    /// Formatted result of sample `index`.
    pub fn run_sample(&self, index: usize) -> Result<Vec<String>> {
        let projected = self.project_sample(index)?;
        Ok(format_vector(&projected, self.precision))
    }

    /// Run every sample in input order, handing `(index, values)` to `sink`.
    /// The first error from a sample or from `sink` stops the run.
    pub fn run<F>(&self, mut sink: F) -> Result<()>
    where
        F: FnMut(usize, Vec<String>) -> Result<()>,
    {
        for i in 0..self.samples.len() {
            let values = self.run_sample(i)?;
            sink(i, values)?;
        }
        Ok(())
    }
}
